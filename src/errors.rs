use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde_yaml: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
    #[error("in {feature}: struct {structure}: member {member}: base type `{base_type}` is not a known struct, handle, function pointer, or scalar")]
    UnclassifiedBaseType {
        feature: String,
        structure: String,
        member: String,
        base_type: String,
    },
    #[error("in {feature}: struct {structure}: member {member}: no decoded slot type for base type `{base_type}`")]
    UnresolvedSlotType {
        feature: String,
        structure: String,
        member: String,
        base_type: String,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
