use crate::cli::Command;

pub mod import;
pub mod reset;
pub mod show;

pub async fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        Command::Import(args) => import::run(args).await,
        Command::Show(args) => show::run(args).await,
        Command::Reset(args) => reset::run(args).await,
    }
}
