use clap::Parser;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "dirtree",
    version,
    about = "Print a directory as a color-coded tree",
    long_about = "Print a directory as a color-coded tree.\n\n\
                  Skipped everywhere: node_modules, .next, .git, dist, build, \
                  .cache, __pycache__, venv."
)]
pub struct Args {
    /// Directory to print (default: current directory)
    pub path: Option<PathBuf>,
}

impl Args {
    /// The directory to start from: the positional argument, else the
    /// current working directory.
    pub fn start_dir(&self) -> io::Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => std::env::current_dir(),
        }
    }
}
