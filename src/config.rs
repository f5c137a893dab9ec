use crate::error::VmError;

#[derive(Debug, PartialEq)]
pub struct Config {
    pub filename: String,
}

impl Config {
    pub fn with(args: &[String]) -> Result<Self, VmError> {
        if args.len() < 2 {
            return Err(VmError::MissingImage);
        }

        Ok(Self {
            filename: args[1].clone(),
        })
    }
}
