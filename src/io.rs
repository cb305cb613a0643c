use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;
use strum::Display;

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error, if any.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Serialization formats for config files and reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    #[default]
    Yaml,
    Json,
    Toml,
}
impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &str) -> IoResult<Self> {
        match path.rsplit('.').next() {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            _ => {
                let supported_filetypes = vec!["json", "toml", "yaml", "yml"];
                let error_string = format!("Unsupported filetype: {}\nSupported filetypes: {:?}", path, supported_filetypes);
                Err(IoError{file: Some(path.to_string()), cause: IoErrorType::StringOnly(error_string)})
            },
        }
    }
}

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    let file = match std::fs::File::open(path){
        Ok(file) => file,
        Err(error) => {
            return Err(IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)});
        },
    };
    Ok(file)
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    let file = match std::fs::File::create(path){
        Ok(file) => file,
        Err(error) => {
            return Err(IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)});
        },
    };
    Ok(file)
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    match std::fs::read_to_string(path){
        Ok(buffer) => Ok(buffer),
        Err(error) => Err(IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)}),
    }
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    match f.write_all(buffer.as_bytes()){
        Ok(_) => Ok(()),
        Err(error) => Err(IoError{file: Some(path.to_string()), cause: IoErrorType::File(error)}),
    }
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    let with_file = |cause| IoError{file: Some(path.to_string()), cause};
    match Format::from_path(path)? {
        Format::Json => serde_json::from_reader(open(path)?)
            .map_err(|error| with_file(IoErrorType::SerdeJson(error))),
        Format::Toml => toml::from_str(&read_to_string(path)?)
            .map_err(|error| with_file(IoErrorType::TomlDe(error))),
        Format::Yaml => serde_yaml::from_reader(open(path)?)
            .map_err(|error| with_file(IoErrorType::SerdeYaml(error))),
    }
}

/// Serialize a value to a string in the given format.
pub fn to_format_string<T>(value: &T, format: Format) -> IoResult<String>
where T: Serialize
{
    let no_file = |cause| IoError{file: None, cause};
    match format {
        Format::Yaml => serde_yaml::to_string(value)
            .map_err(|error| no_file(IoErrorType::SerdeYaml(error))),
        Format::Json => serde_json::to_string_pretty(value)
            .map_err(|error| no_file(IoErrorType::SerdeJson(error))),
        Format::Toml => toml::to_string_pretty(value)
            .map_err(|error| no_file(IoErrorType::TomlSer(error))),
    }
}

/// Write a value to a file, picking the format from the file extension.
pub fn write_cfg_file<T>(path: &str, value: &T) -> IoResult<()>
where T: Serialize
{
    let buffer = to_format_string(value, Format::from_path(path)?)?;
    write_to_file(path, &buffer)
}
