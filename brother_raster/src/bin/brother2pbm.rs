use brother_raster::{
    error::RasterError,
    reader::{brother::BrotherRasterReader, RasterReader},
    source::ReadSource,
    writer::{pbm::PbmWriter, RasterPageWriter},
};
use clap::Parser;
use derive_more::From;
use env_logger::Env;
use log::{error, info, LevelFilter};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, IsTerminal, Read},
    path::PathBuf,
    process::ExitCode,
};
use thiserror::Error;

#[derive(Parser)]
/// Converts the pages of a Brother print job into PBM images
struct Options {
    /// The print job to read, standard input if omitted
    input: Option<PathBuf>,
    /// Prefix of the output files `<PREFIX>-<N>.pbm`, defaults to INPUT or `page`
    prefix: Option<String>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("No filename given and no input on stdin")]
    NoInput,
    #[error("Can't open file \"{}\"", .0.display())]
    Open(PathBuf, #[source] io::Error),
    #[error("Can't write file \"{}\"", .0.display())]
    Create(PathBuf, #[source] io::Error),
    #[error(transparent)]
    Raster(#[from] RasterError),
}

#[derive(From)]
enum Input {
    File(BufReader<File>),
    Stdin(io::StdinLock<'static>),
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::File(file) => file.read(buf),
            Input::Stdin(stdin) => stdin.read(buf),
        }
    }
}

fn open_input(path: Option<&PathBuf>) -> Result<Input, CliError> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| CliError::Open(path.clone(), e))?;
            Ok(BufReader::new(file).into())
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                return Err(CliError::NoInput);
            }
            Ok(stdin.lock().into())
        }
    }
}

fn run(opt: Options) -> Result<(), CliError> {
    let input = open_input(opt.input.as_ref())?;
    let prefix = match (opt.prefix, &opt.input) {
        (Some(prefix), _) => prefix,
        (None, Some(path)) => path.display().to_string(),
        (None, None) => String::from("page"),
    };

    let mut reader = BrotherRasterReader::new(ReadSource::new(input));
    let mut page_num = 1;
    while let Some(page) = reader.next_page()? {
        let path = PathBuf::from(format!("{}-{}.pbm", prefix, page_num));
        let file = File::create(&path).map_err(|e| CliError::Create(path.clone(), e))?;
        let mut writer = PbmWriter::new(BufWriter::new(file));
        writer.write_page(&page)?;
        writer.finish()?;
        info!("{}", path.display());
        page_num += 1;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("BROTHER_RASTER_LOG"))
        .init();
    let opt = Options::parse();
    match run(opt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
