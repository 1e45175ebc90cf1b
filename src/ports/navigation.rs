use crate::presentation::handoff::ResultParams;

pub trait NavigationPort: Send + Sync {
    fn navigate_to_result(&self, params: ResultParams);
    fn navigate_back(&self);
}
