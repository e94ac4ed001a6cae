mod data;
mod error;
mod graphics;
mod math;
mod modes;
mod sim;

use std::process::ExitCode;

use data::Program;

fn main() -> ExitCode {
    data::log::init();

    let args: Vec<String> = std::env::args().collect();

    let prog = match Program::new().eval_args(&mut args.iter()) {
        Ok(prog) => prog,
        Err(e) => {
            log::error!("Argument error: {e}");
            return ExitCode::from(2);
        }
    };

    match modes::windowed_mode::winit_main(prog) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
