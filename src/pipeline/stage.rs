use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a turn is in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    ReceivedInput,
    TranslatedToPivot,
    Classified,
    ResolvedIntent,
    Formatted,
    TranslatedToUser,
    Done,
    Failed,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStage::ReceivedInput => "received_input",
            PipelineStage::TranslatedToPivot => "translated_to_pivot",
            PipelineStage::Classified => "classified",
            PipelineStage::ResolvedIntent => "resolved_intent",
            PipelineStage::Formatted => "formatted",
            PipelineStage::TranslatedToUser => "translated_to_user",
            PipelineStage::Done => "done",
            PipelineStage::Failed => "failed",
        };
        f.write_str(name)
    }
}
