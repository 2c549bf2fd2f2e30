use std::process::ExitCode;

fn main() -> ExitCode {
    shoppingbot_cli::run()
}
