use std::str::FromStr;

use log::{error, info, warn};

use crate::data::{Program, MAX_BALLS, MAX_FPS, MAX_SCALE_FACTOR, MAX_THICKNESS, WIN_H, WIN_W};
use crate::error::ArgError;

fn parse_value<T: FromStr>(flag: &'static str, value: Option<&String>) -> Result<T, ArgError> {
    let value = value.ok_or(ArgError::MissingValue(flag))?;

    value.parse::<T>().map_err(|_| ArgError::InvalidValue {
        flag,
        value: value.clone(),
    })
}

fn parse_in_range<T>(
    flag: &'static str,
    value: Option<&String>,
    min: T,
    max: T,
) -> Result<T, ArgError>
where
    T: FromStr + PartialOrd + Into<u64> + Copy,
{
    let v = parse_value::<T>(flag, value)?;

    if v < min || v > max {
        return Err(ArgError::OutOfRange {
            flag,
            min: min.into(),
            max: max.into(),
        });
    }

    Ok(v)
}

impl Program {
    /// Applies command line flags. The first item is the program name.
    ///
    /// Spawns the startup balls once the seed is known.
    pub fn eval_args(mut self, args: &mut dyn Iterator<Item = &String>) -> Result<Self, ArgError> {
        let mut seed: Option<u64> = None;

        args.next();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--balls" => {
                    self.initial_balls = parse_value::<usize>("--balls", args.next())?;

                    if self.initial_balls > MAX_BALLS {
                        return Err(ArgError::OutOfRange {
                            flag: "--balls",
                            min: 0,
                            max: MAX_BALLS as u64,
                        });
                    }
                }

                "--seed" => seed = Some(parse_value::<u64>("--seed", args.next())?),

                "--fps" => self.fps = parse_in_range("--fps", args.next(), 1, MAX_FPS)?,

                "--scale" => {
                    self.scale = parse_in_range("--scale", args.next(), 1, MAX_SCALE_FACTOR)?
                }

                "--thickness" => {
                    self.thickness = parse_in_range("--thickness", args.next(), 1, MAX_THICKNESS)?
                }

                "--quiet" => self.quiet = true,

                other => error!("Argument error: Unknown option {}", other),
            }
        }

        if self.quiet {
            super::log::set_quiet();
        }

        if let Some(seed) = seed {
            self.reseed(seed);
        }

        self.populate();

        Ok(self)
    }

    pub fn print_startup_info(&self) {
        let mut string_out = String::new();

        string_out += "Bouncing balls\n";
        string_out += "Startup configurations:\n";
        string_out += &format!("Field: {}x{}\n", WIN_W, WIN_H);
        string_out += &format!(
            "Tick rate: {}hz ({:.2}ms)\n",
            self.fps(),
            self.tick_interval().as_secs_f64() * 1000.0
        );
        string_out += &format!("Window scale: {}\n", self.scale());
        string_out += &format!("Point thickness: {}\n", self.thickness());
        string_out += &format!("Seed: {}\n", self.seed());
        string_out += "Keys: n or SPACE spawns a ball, ESC quits";

        info!("{}", string_out);
        info!("{}", self.label());

        if self.world().is_empty() {
            info!("Starting with an empty field.");
        } else if self.world().len() > 1000 {
            warn!(
                "{} balls are rasterized on the CPU every frame, \
                expect a low frame rate.",
                self.world().len()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DEFAULT_BALLS, DEFAULT_FPS, DEFAULT_THICKNESS, DEFAULT_WIN_SCALE};

    fn eval(args: &[&str]) -> Result<Program, ArgError> {
        let args: Vec<String> = std::iter::once("bounceballs")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();

        Program::new().eval_args(&mut args.iter())
    }

    #[test]
    fn defaults() {
        let prog = eval(&[]).unwrap();

        assert_eq!(prog.fps(), DEFAULT_FPS);
        assert_eq!(prog.scale(), DEFAULT_WIN_SCALE);
        assert_eq!(prog.thickness(), DEFAULT_THICKNESS);
        assert_eq!(prog.world().len(), DEFAULT_BALLS);
        assert!(!prog.quiet);
    }

    #[test]
    fn flags() {
        let prog = eval(&[
            "--balls", "3", "--seed", "77", "--fps", "120", "--scale", "2", "--thickness", "1",
        ])
        .unwrap();

        assert_eq!(prog.world().len(), 3);
        assert_eq!(prog.seed(), 77);
        assert_eq!(prog.fps(), 120);
        assert_eq!(prog.scale(), 2);
        assert_eq!(prog.thickness(), 1);
    }

    #[test]
    fn seed_makes_startup_reproducible() {
        let a = eval(&["--seed", "5"]).unwrap();
        let b = eval(&["--seed", "5"]).unwrap();
        assert_eq!(a.world().balls(), b.world().balls());
    }

    #[test]
    fn unknown_options_are_skipped() {
        let prog = eval(&["--frobnicate", "--balls", "0"]).unwrap();
        assert!(prog.world().is_empty());
    }

    #[test]
    fn missing_value() {
        assert_eq!(eval(&["--fps"]).err(), Some(ArgError::MissingValue("--fps")));
    }

    #[test]
    fn invalid_value() {
        assert_eq!(
            eval(&["--scale", "big"]).err(),
            Some(ArgError::InvalidValue {
                flag: "--scale",
                value: "big".into()
            })
        );
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            eval(&["--thickness", "0"]).err(),
            Some(ArgError::OutOfRange {
                flag: "--thickness",
                min: 1,
                max: MAX_THICKNESS as u64
            })
        );
        assert!(eval(&["--fps", "1000"]).is_err());
        assert!(eval(&["--balls", "100001"]).is_err());
    }
}
