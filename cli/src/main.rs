mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, list, menu, range};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();

    logging::init(cfg.verbose);
    print::banner(cfg.no_banner);

    match commands.command {
        None | Some(Commands::Menu) => {
            print::header("interactive monitor");
            menu::menu(&cfg).await?;
        }
        Some(Commands::Check { sites }) => {
            print::header("net check");
            check::check(sites, &cfg).await?;
        }
        Some(Commands::Range { low, high }) => {
            print::header("range monitor");
            range::range(low, high, &cfg).await?;
        }
        Some(Commands::List { file }) => {
            print::header("list monitor");
            list::list(&file, &cfg).await?;
        }
    }

    print::end_of_program();
    Ok(())
}
