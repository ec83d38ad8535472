//! Whole-file reading and writing around the codec.

use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
};

use log::{debug, error};

use super::cli::{HuffOpts, Output};
use crate::error::HuffError;

/// Read an entire input file into memory.
pub fn read_input(fname: &str) -> Result<Vec<u8>, HuffError> {
    match fs::read(fname) {
        Ok(data) => {
            debug!("Read {} bytes from {}", data.len(), fname);
            Ok(data)
        }
        Err(e) => {
            error!("Cannot read from the file {}", fname);
            Err(e.into())
        }
    }
}

/// Write `data` to `out_name`, or to stdout if that is where opts sends output.
/// An existing file is only replaced when force_overwrite is set.
pub fn write_output(opts: &HuffOpts, out_name: &str, data: &[u8]) -> Result<(), HuffError> {
    if opts.output == Output::Stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle.write_all(data)?;
        handle.flush()?;
        return Ok(());
    }

    // create_new makes the existence check and the create a single step.
    let mut f_out = match OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .create_new(!opts.force_overwrite)
        .open(out_name)
    {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            error!("Output file {} already exists (use -f to overwrite)", out_name);
            return Err(e.into());
        }
        Err(e) => {
            error!("Cannot write to the file {}", out_name);
            return Err(e.into());
        }
    };
    f_out.write_all(data)?;
    debug!("Wrote {} bytes to {}", data.len(), out_name);
    Ok(())
}

/// Delete an input file once its output is safely written.
pub fn remove_input(fname: &str) -> Result<(), HuffError> {
    fs::remove_file(fname)?;
    debug!("Removed {}", fname);
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{read_input, remove_input, write_output};
    use crate::error::HuffError;
    use crate::tools::cli::HuffOpts;

    fn scratch(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!("huffpack-io-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn write_read_remove_test() {
        let path = scratch("plain.txt");
        let _ = std::fs::remove_file(&path);
        let opts = HuffOpts::new();
        write_output(&opts, &path, b"hello").unwrap();
        assert_eq!(read_input(&path).unwrap(), b"hello");
        remove_input(&path).unwrap();
        assert!(matches!(read_input(&path), Err(HuffError::Io(_))));
    }

    #[test]
    fn no_overwrite_test() {
        let path = scratch("exists.txt");
        std::fs::write(&path, b"old").unwrap();
        let mut opts = HuffOpts::new();
        match write_output(&opts, &path, b"new") {
            Err(HuffError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::AlreadyExists),
            other => panic!("expected AlreadyExists, got {:?}", other),
        }
        assert_eq!(std::fs::read(&path).unwrap(), b"old");

        opts.force_overwrite = true;
        write_output(&opts, &path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        // A shorter write replaces the whole file.
        write_output(&opts, &path, b"n").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"n");
        std::fs::remove_file(&path).unwrap();
    }
}
