use std::io;

use gauntlet::build_info;
use gauntlet::run_campaign;
use gauntlet::ui::TerminalConsole;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "gauntlet {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Gauntlet - Terminal Turn-Combat Stage Crawler\n");
                println!("Usage: gauntlet [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!("\nWith no command, starts a new campaign: fight through");
                println!("100 stages, choosing one of five actions each turn.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'gauntlet --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut console = TerminalConsole::new();
    let mut rng = rand::thread_rng();
    run_campaign(&mut console, &mut rng)?;

    Ok(())
}
