//! User actions accepted by the selection controller.

use crate::band::PercentageBand;
use crate::skip::SkipOption;
use crate::waste::WasteType;

/// Every mutation a view can request.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionAction {
    ToggleWasteType(WasteType),
    SelectPercentage(PercentageBand),
    SelectSkip(SkipOption),
    ClosePopup,
    ReopenPopup,
}
