use clap::{Parser, Subcommand};
use fdtd_util::file_edit::*;
use fdtd_util::geometry::*;
use fdtd_util::util::*;
use fdtd_util::Error;

/// Helpers for setting up FDTD simulation runs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print build provenance
    Info,

    /// Print a readable form of a number of seconds
    Duration { seconds: f64 },

    /// Round a number up to a multiple of a base
    RoundUp {
        #[arg(allow_negative_numbers = true)]
        x: f64,

        #[arg(short, long, default_value_t = 1.0)]
        base: f64,
    },

    /// Fit a flux box around a source, 1 to 3 coordinates
    FluxBox {
        /// Desired edge length
        #[arg(short, long)]
        size: f64,

        /// Source coordinates, x [y [z]]
        #[arg(
            num_args = 1..=3,
            required = true,
            allow_negative_numbers = true
        )]
        source: Vec<f64>,

        #[arg(long, allow_negative_numbers = true)]
        xmin: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        xmax: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        ymin: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        ymax: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        zmin: Option<f64>,
        #[arg(long, allow_negative_numbers = true)]
        zmax: Option<f64>,
    },

    /// Print the flux regions of a box given its size and center
    FluxRegions {
        /// Box extent, x y z
        #[arg(
            long,
            num_args = 3,
            required = true,
            allow_negative_numbers = true
        )]
        size: Vec<f64>,

        /// Box center, x y z
        #[arg(
            long,
            num_args = 3,
            required = true,
            allow_negative_numbers = true
        )]
        center: Vec<f64>,

        /// Only this face, one of X+ X- Y+ Y- Z+ Z-
        #[arg(long)]
        face: Option<String>,

        /// Four sides in the z = 0 plane instead of six faces
        #[arg(long, conflicts_with = "face")]
        two_d: bool,
    },

    /// Print layer centers from thicknesses
    Layers {
        /// Coordinate of the bottom surface
        #[arg(
            short,
            long,
            default_value_t = 0.0,
            allow_negative_numbers = true
        )]
        bottom: f64,

        #[arg(required = true)]
        thicknesses: Vec<f64>,
    },

    /// Regex substitution on every line of a file
    Sub {
        input: std::path::PathBuf,
        output: std::path::PathBuf,

        /// PATTERN REPLACEMENT pair, repeatable, applied in the order given
        #[arg(
            short,
            long = "rule",
            num_args = 2,
            value_names = ["PATTERN", "REPLACEMENT"]
        )]
        rules: Vec<String>,
    },

    /// Insert a line into a file
    AddLine {
        input: std::path::PathBuf,
        output: std::path::PathBuf,

        /// Text of the new line
        #[arg(short, long)]
        line: String,

        /// Insert before the first line matching this pattern
        #[arg(long)]
        before: Option<String>,

        /// Insert after the first line matching this pattern
        #[arg(long)]
        after: Option<String>,

        /// Zero based line index of the new line
        #[arg(long)]
        number: Option<usize>,
    },
}

/// Pair up `--rule PATTERN REPLACEMENT` values.
fn parse_rules(values: &[String]) -> fdtd_util::Result<Vec<SubRule>> {
    if values.len() % 2 != 0 {
        return Err(Error::InvalidArgument(
            "every --rule needs a PATTERN and a REPLACEMENT".to_string(),
        ));
    }
    values
        .chunks_exact(2)
        .map(|pair| SubRule::new(&pair[0], &pair[1]))
        .collect()
}

/// Reject bounds on axes the source doesn't have.
fn check_bounds(
    dims: usize,
    bounds: &[Interval; 3],
) -> fdtd_util::Result<()> {
    const AXES: [&str; 3] = ["x", "y", "z"];
    for (d, bound) in bounds.iter().enumerate().skip(dims) {
        if bound.min.is_some() || bound.max.is_some() {
            return Err(Error::InvalidArgument(format!(
                "bounds given for {} but the source has {} coordinate(s)",
                AXES[d], dims
            )));
        }
    }
    Ok(())
}

fn print_regions(regions: &[FluxRegion]) {
    for r in regions {
        println!("{r}");
    }
}

fn run(args: Args) -> fdtd_util::Result<()> {
    match args.command {
        Command::Info => fdtd_util::build_info::print_report("fdtd-util"),
        Command::Duration { seconds } => {
            println!("{}", readable_seconds(seconds)?.trim_end())
        }
        Command::RoundUp { x, base } => println!("{}", round_up(x, base)),
        Command::FluxBox {
            size,
            source,
            xmin,
            xmax,
            ymin,
            ymax,
            zmin,
            zmax,
        } => {
            let x = Interval::new(xmin, xmax);
            let y = Interval::new(ymin, ymax);
            let z = Interval::new(zmin, zmax);
            check_bounds(source.len(), &[x, y, z])?;
            match source[..] {
                [sx] => {
                    let fit = fit_1d(size, sx, x);
                    println!("edge: {}, center: {}", fit.edge, fit.center);
                }
                [sx, sy] => {
                    let fit = fit_2d(size, Vec3::new(sx, sy, 0.0), [x, y]);
                    println!(
                        "edge: {}, center: ({}, {})",
                        fit.edge, fit.center.x, fit.center.y
                    );
                }
                _ => {
                    let source = Vec3::from_column_slice(&source);
                    let fit = fit_3d(size, source, [x, y, z]);
                    println!(
                        "edge: {}, center: ({}, {}, {})",
                        fit.edge, fit.center.x, fit.center.y, fit.center.z
                    );
                }
            }
        }
        Command::FluxRegions {
            size,
            center,
            face,
            two_d,
        } => {
            let flux_box = FluxBox::from_center(
                Vec3::from_column_slice(&size),
                Vec3::from_column_slice(&center),
            );
            if two_d {
                print_regions(&flux_box.flux_regions_2d());
            } else if let Some(face) = face {
                print_regions(&[flux_box.face_region(face.parse()?)]);
            } else {
                print_regions(&flux_box.flux_regions());
            }
        }
        Command::Layers {
            bottom,
            thicknesses,
        } => {
            for c in center_from_thickness(&thicknesses, bottom) {
                println!("{c}");
            }
        }
        Command::Sub {
            input,
            output,
            rules,
        } => {
            let rules = parse_rules(&rules)?;
            file_re_sub(&input, &output, &rules)?;
        }
        Command::AddLine {
            input,
            output,
            line,
            before,
            after,
            number,
        } => {
            let mut insertion = LineInsertion::new();
            if let Some(before) = before {
                insertion = insertion.before(&before)?;
            }
            if let Some(after) = after {
                insertion = insertion.after(&after)?;
            }
            if let Some(number) = number {
                insertion = insertion.number(number);
            }
            file_add_line(&input, &output, &line, &insertion)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn parse_rules_keeps_equals_test() {
        let rules = parse_rules(&strings(&[
            r"resolution = \d+",
            "resolution = 40",
            "a=b",
            "c",
        ]))
        .unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].pattern.as_str(), r"resolution = \d+");
        assert_eq!(rules[0].replacement, "resolution = 40");
        assert_eq!(rules[1].pattern.as_str(), "a=b");
        assert_eq!(rules[1].replacement, "c");
    }

    #[test]
    fn parse_rules_rejects_unpaired_test() {
        let result = parse_rules(&strings(&["pattern"]));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn cli_rule_pairs_test() {
        let args = Args::try_parse_from([
            "fdtd-util",
            "sub",
            "in.py",
            "out.py",
            "--rule",
            r"resolution = \d+",
            "resolution = 40",
            "-r",
            "x",
            "y",
        ])
        .unwrap();
        let Command::Sub { rules, .. } = args.command else {
            panic!("expected sub command");
        };
        let rules = parse_rules(&rules).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].replacement, "y");

        let missing = Args::try_parse_from([
            "fdtd-util", "sub", "in.py", "out.py", "--rule", "only",
        ]);
        assert!(missing.is_err());
    }

    #[test]
    fn check_bounds_test() {
        let bounds = [
            Interval::closed(0.0, 1.0),
            Interval::new(Some(0.0), None),
            Interval::unbounded(),
        ];
        assert!(check_bounds(2, &bounds).is_ok());
        assert!(check_bounds(3, &bounds).is_ok());
        assert!(matches!(
            check_bounds(1, &bounds),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn flux_box_rejects_extra_bounds_test() {
        let args = Args::try_parse_from([
            "fdtd-util", "flux-box", "-s", "1", "0.5", "--zmin", "-1",
        ])
        .unwrap();
        assert!(matches!(run(args), Err(Error::InvalidArgument(_))));
    }
}
