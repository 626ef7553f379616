use std::cell::RefCell;
use std::rc::Rc;

/// User fields appended to every emitted event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentity {
    pub user_id: Option<String>,
    pub account_id: Option<String>,
}

/// Identity owned by a provider and read by all of its loggers.
pub type SharedIdentity = Rc<RefCell<UserIdentity>>;

impl UserIdentity {
    pub fn set(&mut self, user_id: &str, account_id: Option<&str>) {
        self.user_id = Some(user_id.to_string());
        self.account_id = account_id.map(str::to_string);
    }

    pub fn clear(&mut self) {
        self.user_id = None;
        self.account_id = None;
    }

    /// User id, empty strings count as unset.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref().filter(|id| !id.is_empty())
    }
}
