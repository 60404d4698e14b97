/// Errors reported by a status check on a program (link, validation...)
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The requested status is not link, validate or compile
    #[error("don't know what to check for in {program}: {what}")]
    UnknownCheckKind { program: String, what: u32 },
    /// The driver returned no info log. Treated as an error even if the status is ok
    #[error("empty program info log of {program}")]
    EmptyLog { program: String },
    /// The driver reported an explicit failure
    #[error("failed {verb}ing {program}:\n{log}")]
    Failed {
        program: String,
        verb: &'static str,
        log: String,
    },
    /// The driver returned something that is neither true nor false
    #[error("{program} {verb}ing status unknown. log:\n{log}")]
    AmbiguousStatus {
        program: String,
        verb: &'static str,
        raw: i32,
        log: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// The driver could not allocate the program object
    #[error("could not create program {name}: {reason}")]
    CreationFailed { name: String, reason: String },
    /// Only vertex and fragment stages can be attached
    #[error("program {name} does not accept shader stages of type {stage_type:#x}")]
    UnsupportedStageKind { name: String, stage_type: u32 },
    /// Linking requires both a vertex and a fragment stage
    #[error("program {name} does not have vertex and fragment shader yet, cannot be linked")]
    MissingStage { name: String },
    #[error("linking of program {name} failed.")]
    LinkFailed {
        name: String,
        #[source]
        source: CheckError,
    },
    #[error("validation of program {name} failed.")]
    ValidationFailed {
        name: String,
        #[source]
        source: CheckError,
    },
}
