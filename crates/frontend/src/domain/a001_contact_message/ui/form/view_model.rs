use super::model::FetchTransport;
use contracts::domain::a001_contact_message::FormField;
use contracts::enums::{BudgetRange, ProjectType, Timeline};
use contracts::shared::config::Config;
use contracts::usecases::u501_submit_contact::{
    submit_contact_message, ContactFormMachine, SubmitRejected, SuccessTicket, SUCCESS_DISPLAY_MS,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// ViewModel for the contact form
#[derive(Clone, Copy)]
pub struct ContactFormViewModel {
    pub machine: RwSignal<ContactFormMachine>,
    config: StoredValue<Config>,
    // Owned by the component: disposing the view drops and thereby cancels it
    success_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl ContactFormViewModel {
    pub fn new(config: Config) -> Self {
        Self {
            machine: RwSignal::new(ContactFormMachine::new()),
            config: StoredValue::new(config),
            success_timer: StoredValue::new_local(None),
        }
    }

    /// Reactive raw value of one input
    pub fn field(&self, field: FormField) -> Signal<String> {
        let machine = self.machine;
        Signal::derive(move || machine.with(|m| m.form().field_value(field)))
    }

    /// Input handler writing into one field
    pub fn on_field_input(&self, field: FormField) -> Callback<String> {
        let machine = self.machine;
        Callback::new(move |value: String| {
            machine.update(|m| m.update_field(field, value));
        })
    }

    pub fn is_submitting(&self) -> bool {
        self.machine.with(|m| m.is_submitting())
    }

    pub fn is_success(&self) -> bool {
        self.machine.with(|m| m.last_submitted().is_some())
    }

    pub fn error_message(&self) -> Option<String> {
        self.machine.with(|m| m.error_message().map(str::to_string))
    }

    /// WhatsApp follow-up link for the submission being confirmed
    pub fn whatsapp_link(&self) -> Option<String> {
        let config = self.config;
        self.machine.with(|m| {
            m.last_submitted()
                .map(|data| config.with_value(|c| c.whatsapp.link_for(data)))
        })
    }

    pub fn project_type_options() -> Vec<(&'static str, &'static str)> {
        let mut options = vec![("", "Sélectionnez un service")];
        options.extend(ProjectType::all().iter().map(|p| (p.code(), p.display_name())));
        options
    }

    pub fn budget_options() -> Vec<(&'static str, &'static str)> {
        let mut options = vec![("", "Sélectionnez une fourchette")];
        options.extend(BudgetRange::all().iter().map(|b| (b.code(), b.display_name())));
        options
    }

    pub fn timeline_options() -> Vec<(&'static str, &'static str)> {
        let mut options = vec![("", "Sélectionnez un délai")];
        options.extend(Timeline::all().iter().map(|t| (t.code(), t.display_name())));
        options
    }

    /// Validate and send the form to the CMS
    pub fn submit_command(&self) {
        let request = match self.machine.try_update(|m| m.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(SubmitRejected::InFlight)) => {
                log::debug!("Submit ignored: a request is already in flight");
                return;
            }
            Some(Err(rejected)) => {
                log::debug!("Submit rejected: {}", rejected);
                return;
            }
            None => return,
        };

        let endpoint = self.config.with_value(|c| c.backend.endpoint());
        let vm = *self;
        spawn_local(async move {
            let outcome = submit_contact_message(&FetchTransport, &endpoint, &request).await;
            let ticket = vm
                .machine
                .try_update(|m| m.complete(outcome, now_ms()))
                .flatten();

            if let Some(ticket) = ticket {
                log::info!("Contact message sent");
                vm.arm_success_timer(ticket, SUCCESS_DISPLAY_MS);
            }
        });
    }

    fn arm_success_timer(&self, ticket: SuccessTicket, delay_ms: u64) {
        let vm = *self;
        let timeout = Timeout::new(delay_ms as u32, move || {
            let remaining = vm
                .machine
                .try_update(|m| {
                    let now = now_ms();
                    if m.expire_success(ticket, now) {
                        None
                    } else {
                        m.success_remaining_ms(ticket, now)
                    }
                })
                .flatten();

            if let Some(remaining) = remaining {
                // Re-arm on the next tick: the running Timeout must not be dropped from its own callback
                spawn_local(async move {
                    vm.arm_success_timer(ticket, remaining.max(1));
                });
            }
        });

        // Replacing the slot drops, and so cancels, any earlier timer
        self.success_timer.try_update_value(|slot| *slot = Some(timeout));
    }
}
