mod campaign;
mod integration;
mod payment_event;
mod snapshot;

pub use campaign::{Campaign, CampaignCounters};
pub use integration::{CreateIntegration, Gateway, Integration};
pub use payment_event::{
    CanonicalStatus, Customer, EventDraft, LedgerOutcome, LedgerOperation, PaymentEvent,
};
pub use snapshot::FinanceSnapshot;
