use std::path::Path;
use std::process::Command;

use log::debug;

use crate::{Error, ErrorKind, TagSet};

/// A collaborator that runs the AtomicParsley executable to completion.
///
/// The core depends on nothing but this seam: given an executable path and an argument
/// vector, run the process and return its captured standard output. Implementations map
/// a failed launch or a non zero exit status to [`ErrorKind::Execution`], surfacing the
/// captured standard error text verbatim rather than interpreting it.
pub trait Invoker {
    /// Runs the executable with the arguments, blocking until it exits.
    fn run(&self, binary: &Path, args: &[String]) -> crate::Result<String>;
}

/// The default invoker, executing the tool as a blocking subprocess.
#[derive(Clone, Copy, Debug, Default)]
pub struct Subprocess;

impl Invoker for Subprocess {
    fn run(&self, binary: &Path, args: &[String]) -> crate::Result<String> {
        debug!("running {} with {:?}", binary.display(), args);
        let output = Command::new(binary).args(args).output().map_err(|err| {
            Error::new(
                ErrorKind::Execution(err.to_string()),
                format!("Failed to launch {}.", binary.display()),
            )
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(Error::new(
                ErrorKind::Execution(stderr),
                "AtomicParsley exited with an error.".to_owned(),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Builds the argument vector of a write request.
///
/// Flag and value pairs appear in the iteration order of the tag set; `-W` is always last.
pub(crate) fn write_args(path: &Path, tags: &TagSet) -> Vec<String> {
    let mut args = Vec::with_capacity(2 * tags.len() + 2);
    args.push(path.to_string_lossy().into_owned());
    for (name, value) in tags.iter() {
        args.push(format!("--{}", name));
        args.push(value.to_owned());
    }
    args.push("-W".to_owned());
    args
}

/// Builds the argument vector of a read request, asking the tool for its atom dump.
pub(crate) fn read_args(path: &Path) -> Vec<String> {
    vec![path.to_string_lossy().into_owned(), "-t".to_owned()]
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::WriteFlag;

    #[test]
    fn write_args_for_a_single_tag() {
        let mut tags = TagSet::new();
        tags.set(WriteFlag::Title, "Foo");
        let args = write_args(Path::new("music.m4a"), &tags);
        assert_eq!(args, vec!["music.m4a", "--title", "Foo", "-W"]);
    }

    #[test]
    fn write_args_keep_pairs_adjacent_and_terminate_with_w() {
        let mut tags = TagSet::new();
        tags.set(WriteFlag::Title, "Foo");
        tags.set(WriteFlag::Artist, "Bar");
        tags.set(WriteFlag::Year, "2020");
        let args = write_args(Path::new("music.m4a"), &tags);

        assert_eq!(args.len(), 2 * tags.len() + 2);
        assert_eq!(args[0], "music.m4a");
        assert_eq!(args.last().unwrap(), "-W");
        for (flag, value) in &[("--title", "Foo"), ("--artist", "Bar"), ("--year", "2020")] {
            let at = args.iter().position(|a| a == flag).unwrap();
            assert_eq!(args[at + 1], *value);
        }
    }

    #[test]
    fn read_args_request_the_dump() {
        let args = read_args(Path::new("music.m4a"));
        assert_eq!(args, vec!["music.m4a", "-t"]);
    }
}
