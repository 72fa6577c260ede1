mod roller;

pub use roller::Roller;
#[cfg(test)]
pub(crate) use roller::StepRoller;
