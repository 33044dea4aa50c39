use crate::error::JobdashError;

pub type JobdashResult<T> = Result<T, JobdashError>;
