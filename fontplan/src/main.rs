use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use fontmodel::FontModel;
use fontplan::{compile, Args, Config, Error};

fn require_dir(dir: &Path) -> Result<PathBuf, Error> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::ExpectedDirectory(dir.to_owned()));
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|source| Error::FileIo {
            path: dir.to_owned(),
            source,
        })?;
    }
    log::debug!("require_dir {dir:?}");
    Ok(dir.to_path_buf())
}

fn main() -> Result<(), Error> {
    env_logger::builder()
        .format(|buf, record| {
            let ts = buf.timestamp_micros();
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{}: {style}{}{style:#}: {}",
                ts,
                record.level(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();
    require_dir(&args.build_dir)?;
    let config = Config::load(&args.config)?.resolve(&args.build_dir)?;
    let model = FontModel::load(&args.model)?;
    let recipe = compile(&config, &model)?;

    let yml = serde_yaml::to_string(&recipe)?;
    match &args.output {
        Some(path) => fs::write(path, &yml).map_err(|source| Error::FileIo {
            path: path.clone(),
            source,
        })?,
        None => io::stdout()
            .write_all(yml.as_bytes())
            .map_err(Error::StdioWriteFail)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::require_dir;

    #[test]
    fn require_dir_creates_missing_directories() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("a/b");
        assert_eq!(nested, require_dir(&nested).unwrap());
        assert!(nested.is_dir());
    }

    #[test]
    fn require_dir_refuses_files() {
        let temp_dir = tempdir().unwrap();
        let file = temp_dir.path().join("taken");
        std::fs::write(&file, "blah").unwrap();
        assert!(require_dir(&file).is_err());
    }
}
