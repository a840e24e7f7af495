#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashSet, VecDeque};
use std::time::Duration;
use study_room_booker::automation::portal::{Locator, Portal, PortalError};
use study_room_booker::models::booking_config::BookingConfig;

/// What the reservation form shows for one window.
#[derive(Debug, Clone)]
pub enum FormScript {
    Checks { conflict: String, policy: String },
    /// The form never renders its name field.
    Broken,
}

impl FormScript {
    pub fn clear() -> Self {
        Self::checks("No scheduling conflicts", "No policy conflicts")
    }

    pub fn checks(conflict: &str, policy: &str) -> Self {
        FormScript::Checks {
            conflict: conflict.to_string(),
            policy: policy.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Goto(String),
    Click(String),
    Fill(String, String),
    Select(String, String),
}

/// In-memory stand-in for a browser tab.
#[derive(Default)]
pub struct FakePortal {
    /// Successive answers to `current_url`; the last one sticks.
    pub urls: VecDeque<String>,
    pub present: HashSet<String>,
    pub texts: Vec<(String, String)>,
    pub forms: VecDeque<FormScript>,
    pub current_form: Option<FormScript>,
    pub actions: Vec<Action>,
    pub quit: bool,
}

impl FakePortal {
    pub fn with_urls(urls: &[&str]) -> Self {
        FakePortal {
            urls: urls.iter().map(|u| u.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn with_forms(forms: Vec<FormScript>) -> Self {
        FakePortal {
            forms: forms.into(),
            ..Default::default()
        }
    }

    pub fn present(mut self, locator: Locator) -> Self {
        self.present.insert(locator.to_string());
        self
    }

    pub fn gotos(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter_map(|a| match a {
                Action::Goto(url) => Some(url.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clicks(&self, locator: &Locator) -> usize {
        let key = locator.to_string();
        self.actions
            .iter()
            .filter(|a| matches!(a, Action::Click(k) if *k == key))
            .count()
    }

    fn form_has(&self, locator: &Locator) -> bool {
        match (&self.current_form, locator) {
            (Some(FormScript::Checks { .. }), Locator::Id(_) | Locator::ClassName(_)) => true,
            _ => false,
        }
    }

    fn exists(&self, locator: &Locator) -> bool {
        self.present.contains(&locator.to_string()) || self.form_has(locator)
    }
}

#[async_trait]
impl Portal for FakePortal {
    async fn goto(&mut self, url: &str) -> Result<(), PortalError> {
        self.actions.push(Action::Goto(url.to_string()));
        if url.contains("edit_entry.php") {
            self.current_form = self.forms.pop_front();
        } else {
            self.current_form = None;
        }
        Ok(())
    }

    async fn current_url(&mut self) -> Result<String, PortalError> {
        let url = if self.urls.len() > 1 {
            self.urls.pop_front()
        } else {
            self.urls.front().cloned()
        };
        Ok(url.unwrap_or_default())
    }

    async fn wait_for(&mut self, locator: Locator, timeout: Duration) -> Result<(), PortalError> {
        if self.exists(&locator) {
            Ok(())
        } else {
            tokio::time::sleep(timeout).await;
            Err(PortalError::Timeout {
                waiting_for: locator.to_string(),
                after: timeout,
            })
        }
    }

    async fn click(&mut self, locator: Locator) -> Result<(), PortalError> {
        if !self.exists(&locator) {
            return Err(PortalError::NotFound(locator));
        }
        self.actions.push(Action::Click(locator.to_string()));
        Ok(())
    }

    async fn fill(&mut self, locator: Locator, text: &str) -> Result<(), PortalError> {
        if !self.exists(&locator) {
            return Err(PortalError::NotFound(locator));
        }
        self.actions
            .push(Action::Fill(locator.to_string(), text.to_string()));
        Ok(())
    }

    async fn select_value(&mut self, locator: Locator, value: &str) -> Result<(), PortalError> {
        if !self.exists(&locator) {
            return Err(PortalError::NotFound(locator));
        }
        self.actions
            .push(Action::Select(locator.to_string(), value.to_string()));
        Ok(())
    }

    async fn attribute(
        &mut self,
        locator: Locator,
        _name: &str,
    ) -> Result<Option<String>, PortalError> {
        match (&self.current_form, &locator) {
            (Some(FormScript::Checks { conflict, .. }), Locator::Id("conflict_check")) => {
                Ok(Some(conflict.clone()))
            }
            (Some(FormScript::Checks { policy, .. }), Locator::Id("policy_check")) => {
                Ok(Some(policy.clone()))
            }
            _ => Err(PortalError::NotFound(locator.clone())),
        }
    }

    async fn text(&mut self, locator: Locator) -> Result<Option<String>, PortalError> {
        let key = locator.to_string();
        Ok(self
            .texts
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone()))
    }

    async fn quit(&mut self) -> Result<(), PortalError> {
        self.quit = true;
        Ok(())
    }
}

pub fn config(start_time: u32, end_time: u32) -> BookingConfig {
    BookingConfig {
        area: 6,
        room: 17,
        date: NaiveDate::from_ymd_opt(2025, 3, 25).unwrap(),
        start_time,
        end_time,
        room_title: "Study group".into(),
        room_description: "prometheus".into(),
        phone_number: "000-000-0000".into(),
        email: "student@example.com".into(),
    }
}
