use crate::VelocityTrace;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

#[allow(clippy::enum_variant_names)]
#[derive(Debug, PartialEq)]
pub enum SaveLoadError {
    CantOpen,
    CantCreate,
    CantWrite,
    CantRead,
}

pub fn save_trace_to_file(
    trace: &VelocityTrace,
    path: &Path,
    pretty: bool,
) -> Result<(), SaveLoadError> {
    let file = if !path.exists() {
        File::create(path)
    } else {
        OpenOptions::new().truncate(true).write(true).open(path)
    };
    if file.is_err() {
        return Err(SaveLoadError::CantCreate);
    }
    let file = file.unwrap();
    let mut buf_writer = BufWriter::new(file);
    let res = if pretty {
        serde_json::ser::to_writer_pretty(&mut buf_writer, trace)
    } else {
        serde_json::ser::to_writer(&mut buf_writer, trace)
    };
    if res.is_err() {
        return Err(SaveLoadError::CantWrite);
    }
    Ok(())
}

pub fn load_trace_from_file(path: &Path) -> Result<VelocityTrace, SaveLoadError> {
    let file = File::open(path);
    if file.is_err() {
        return Err(SaveLoadError::CantOpen);
    }
    let file = file.unwrap();
    let buf_reader = BufReader::new(file);
    let res = serde_json::de::from_reader(buf_reader);
    if res.is_err() {
        return Err(SaveLoadError::CantRead);
    }
    let trace: VelocityTrace = res.unwrap();
    if !trace.is_rectangular() {
        log::warn!(
            "trace {} has time steps with different particle counts",
            path.display()
        );
    }
    Ok(trace)
}
