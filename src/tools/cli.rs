use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

/// Compress, Decompress, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug)]
pub struct HuffOpts {
    /// Vec of names of files to read for input
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information, 0 (silent) to 5 (trace)
    pub verbose: u8,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            keep_input_files: false,
            op_mode: Mode::Zip,
            output: Output::File,
            verbose: 3,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "huffpack",
    version,
    about = "A Huffman coding file compressor",
    long_about = "
    Compresses each input file into <file>.huf using a Huffman code built from that file's
    own byte frequencies. The frequency table is stored in the file so it can be decoded later."
)]
pub struct Args {
    /// Files to process
    #[clap()]
    files: Vec<String>,

    /// Perform compression on the input files (the default)
    #[clap(short = 'z', long = "compress", conflicts_with_all = &["decompress", "test"])]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress", conflicts_with = "test")]
    decompress: bool,

    /// Compress and decompress in memory and check the result matches
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Keep input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', long = "verbose", default_value_t = 3)]
    v: u8,
}

impl From<Args> for HuffOpts {
    fn from(args: Args) -> Self {
        let op_mode = if args.decompress {
            Mode::Unzip
        } else if args.test {
            Mode::Test
        } else {
            Mode::Zip
        };
        HuffOpts {
            files: args.files,
            force_overwrite: args.force,
            keep_input_files: args.keep,
            op_mode,
            output: if args.stdout {
                Output::Stdout
            } else {
                Output::File
            },
            verbose: args.v.min(5),
        }
    }
}

/// Parse the process arguments, set the log level, and report what we are going to do.
pub fn huffopts_init() -> HuffOpts {
    let opts: HuffOpts = Args::parse().into();
    set_log_level(opts.verbose);

    info!("---- huffpack initialization ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    if opts.files.is_empty() {
        warn!("No input files given, nothing to do");
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };
    info!("Sending output to {}", opts.output);
    opts
}

/// Set the log level
pub fn set_log_level(verbose: u8) {
    match verbose {
        0 => log::set_max_level(log::LevelFilter::Off),
        1 => log::set_max_level(log::LevelFilter::Error),
        2 => log::set_max_level(log::LevelFilter::Warn),
        3 => log::set_max_level(log::LevelFilter::Info),
        4 => log::set_max_level(log::LevelFilter::Debug),
        _ => log::set_max_level(log::LevelFilter::Trace),
    };
}

#[cfg(test)]
mod test {
    use super::{Args, HuffOpts, Mode, Output};
    use clap::Parser;

    fn parse(args: &[&str]) -> HuffOpts {
        Args::try_parse_from(args).unwrap().into()
    }

    #[test]
    fn defaults_test() {
        let opts = parse(&["huffpack", "a.txt"]);
        assert_eq!(opts.op_mode, Mode::Zip);
        assert_eq!(opts.output, Output::File);
        assert_eq!(opts.files, vec!["a.txt".to_string()]);
        assert_eq!(opts.verbose, 3);
        assert!(!opts.keep_input_files);
        assert!(!opts.force_overwrite);
    }

    #[test]
    fn flags_test() {
        let opts = parse(&["huffpack", "-d", "-k", "-f", "-c", "-v", "5", "a.huf", "b.huf"]);
        assert_eq!(opts.op_mode, Mode::Unzip);
        assert_eq!(opts.output, Output::Stdout);
        assert_eq!(opts.files.len(), 2);
        assert_eq!(opts.verbose, 5);
        assert!(opts.keep_input_files);
        assert!(opts.force_overwrite);
    }

    #[test]
    fn test_mode_test() {
        assert_eq!(parse(&["huffpack", "--test", "a"]).op_mode, Mode::Test);
    }

    #[test]
    fn conflicting_modes_test() {
        assert!(Args::try_parse_from(["huffpack", "-z", "-d", "a"]).is_err());
        assert!(Args::try_parse_from(["huffpack", "-d", "-t", "a"]).is_err());
    }

    #[test]
    fn verbosity_clamp_test() {
        assert_eq!(parse(&["huffpack", "-v", "9"]).verbose, 5);
    }
}
