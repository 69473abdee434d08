use std::env;

use youth_events_hub::ui::theme::Theme;

#[derive(Clone)]
pub enum CliMode {
    Dashboard { theme: Theme },
    Serve,
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    let mut serve = false;
    let mut theme = Theme::default();
    let mut args = env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--serve" => {
                serve = true;
            }
            "--theme" => {
                let Some(name) = args.next() else {
                    return Err(format!(
                        "Missing theme name. Available: {}",
                        Theme::available_themes().join(", ")
                    ));
                };
                theme = Theme::get_by_name(&name);
            }
            "--help" => {
                println!("Usage: youth-events-hub [--serve] [--theme NAME]");
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if serve {
        Ok(CliMode::Serve)
    } else {
        Ok(CliMode::Dashboard { theme })
    }
}
