//! Protocol types for the GUI simulation worker.

use tabdeck_core::forms::{ContactInput, ProfileInput};
use tabdeck_core::panels::build::BuildKind;
use tabdeck_core::panels::cache::CacheRecord;
use tabdeck_core::panels::fetch::FetchRecord;
use tabdeck_core::panels::transition::{QuickFormSubmission, TransitionRecord};
use tabdeck_core::CacheStrategy;

/// Generation counter identifying one panel mount.
///
/// The shell bumps the generation on every tab switch. Commands carry the
/// generation of the issuing mount, and the worker drops work whose generation
/// has gone stale, so a timer never outlives the panel that started it.
pub type MountId = u64;

/// Commands issued by the UI thread for the simulation worker to execute.
///
/// Every command stands for one simulated operation: the worker waits the
/// operation's fixed delay and then reports completion. None of these can
/// fail.
#[derive(Debug)]
pub enum SimCmd {
    /// Run the Async Request panel's mock fetch.
    FetchData { mount: MountId },
    /// Run a strategy-tagged mock fetch for the Cache Semantics panel.
    CacheFetch {
        mount: MountId,
        strategy: CacheStrategy,
    },
    /// Run the deferred load for the React 19 Support panel.
    LoadTransition { mount: MountId },
    /// Submit the React 19 quick form; the worker also schedules the banner
    /// auto-reset.
    SubmitQuickForm {
        mount: MountId,
        submission: QuickFormSubmission,
    },
    /// Submit a validated contact form.
    SubmitContact { mount: MountId, input: ContactInput },
    /// Add a todo with already-normalized text.
    AddTodo { mount: MountId, text: String },
    /// Toggle a todo's completion flag.
    ToggleTodo { mount: MountId, id: u64 },
    /// Delete a todo.
    DeleteTodo { mount: MountId, id: u64 },
    /// Save the profile form.
    UpdateProfile { mount: MountId, input: ProfileInput },
    /// Start a simulated build; the worker emits progress ticks until done.
    StartBuild { mount: MountId, kind: BuildKind },
}

impl SimCmd {
    /// Mount generation this command belongs to.
    pub fn mount(&self) -> MountId {
        match self {
            SimCmd::FetchData { mount }
            | SimCmd::CacheFetch { mount, .. }
            | SimCmd::LoadTransition { mount }
            | SimCmd::SubmitQuickForm { mount, .. }
            | SimCmd::SubmitContact { mount, .. }
            | SimCmd::AddTodo { mount, .. }
            | SimCmd::ToggleTodo { mount, .. }
            | SimCmd::DeleteTodo { mount, .. }
            | SimCmd::UpdateProfile { mount, .. }
            | SimCmd::StartBuild { mount, .. } => *mount,
        }
    }
}

/// Events produced by the simulation worker and polled by the UI thread.
#[derive(Debug)]
pub enum SimEvent {
    /// The mock fetch finished.
    FetchDone { mount: MountId, record: FetchRecord },
    /// The strategy-tagged fetch finished.
    CacheDone { mount: MountId, record: CacheRecord },
    /// The deferred load finished.
    TransitionLoaded {
        mount: MountId,
        record: TransitionRecord,
    },
    /// The quick form submission finished; show the banner.
    QuickFormDone {
        mount: MountId,
        submission: QuickFormSubmission,
    },
    /// The banner auto-reset timer fired; hide the banner.
    QuickFormReset { mount: MountId },
    /// The contact form submission finished.
    ContactDone { mount: MountId, input: ContactInput },
    /// The todo add finished.
    TodoAdded { mount: MountId, text: String },
    /// The todo toggle finished.
    TodoToggled { mount: MountId, id: u64 },
    /// The todo delete finished.
    TodoDeleted { mount: MountId, id: u64 },
    /// The profile save finished.
    ProfileUpdated { mount: MountId, input: ProfileInput },
    /// A build progress tick.
    BuildTick {
        mount: MountId,
        kind: BuildKind,
        elapsed_ms: u64,
    },
    /// The build reached its full duration.
    BuildDone { mount: MountId, kind: BuildKind },
}

impl SimEvent {
    /// Mount generation this event belongs to.
    pub fn mount(&self) -> MountId {
        match self {
            SimEvent::FetchDone { mount, .. }
            | SimEvent::CacheDone { mount, .. }
            | SimEvent::TransitionLoaded { mount, .. }
            | SimEvent::QuickFormDone { mount, .. }
            | SimEvent::QuickFormReset { mount }
            | SimEvent::ContactDone { mount, .. }
            | SimEvent::TodoAdded { mount, .. }
            | SimEvent::TodoToggled { mount, .. }
            | SimEvent::TodoDeleted { mount, .. }
            | SimEvent::ProfileUpdated { mount, .. }
            | SimEvent::BuildTick { mount, .. }
            | SimEvent::BuildDone { mount, .. } => *mount,
        }
    }
}
