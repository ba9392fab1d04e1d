use crate::components::widgets;
use crate::dataflow::{Actor, Relay, relay};
use crate::debug_utils::DEBUG_CONTACT;
use crate::icons;
use crate::theme;
use futures::{StreamExt, select};
use shared::{
    CONFIRMATION_DISPLAY_MS, ContactField, ContactForm, ContentStore, PersonalProfile, SUBMIT_DELAY_MS,
    SocialLink, SubmitRejected,
};
use zoon::*;

#[derive(Clone, Debug, Default, PartialEq)]
struct ContactScreenState {
    form: ContactForm,
    /// Why the last submit was refused; cleared by the next edit.
    rejection: Option<SubmitRejected>,
}

/// Contact form driven by one Actor. Timers run as detached tasks that report
/// back through relays, so edits keep flowing while a submission is pending.
/// Unmounting the screen drops the Actor and any late timer event is discarded.
#[derive(Clone)]
struct ContactScreen {
    state: Actor<ContactScreenState>,
    field_edited_relay: Relay<(ContactField, String)>,
    submit_pressed_relay: Relay<()>,
}

impl ContactScreen {
    fn new() -> Self {
        let (field_edited_relay, mut field_edited_stream) = relay::<(ContactField, String)>();
        let (submit_pressed_relay, mut submit_pressed_stream) = relay::<()>();
        let (submit_delay_elapsed_relay, mut submit_delay_elapsed_stream) = relay::<()>();
        let (confirmation_elapsed_relay, mut confirmation_elapsed_stream) = relay::<()>();

        let state = Actor::new(ContactScreenState::default(), async move |state| {
            loop {
                select! {
                    event = field_edited_stream.next() => {
                        match event {
                            Some((field, value)) => {
                                let mut screen_state = state.lock_mut();
                                if screen_state.form.edit(field, value) {
                                    screen_state.rejection = None;
                                }
                            }
                            None => break,
                        }
                    }
                    event = submit_pressed_stream.next() => {
                        match event {
                            Some(()) => {
                                let started = {
                                    let mut screen_state = state.lock_mut();
                                    match screen_state.form.begin_submit() {
                                        Ok(()) => {
                                            screen_state.rejection = None;
                                            true
                                        }
                                        // The button is inert while sending.
                                        Err(SubmitRejected::NotIdle) => false,
                                        Err(rejection) => {
                                            debug_log!(DEBUG_CONTACT, "Submit rejected: {}", rejection);
                                            screen_state.rejection = Some(rejection);
                                            false
                                        }
                                    }
                                };
                                if started {
                                    debug_log!(DEBUG_CONTACT, "Contact form: Idle -> Submitting");
                                    let submit_delay_elapsed_relay = submit_delay_elapsed_relay.clone();
                                    Task::start(async move {
                                        Timer::sleep(SUBMIT_DELAY_MS).await;
                                        submit_delay_elapsed_relay.send(());
                                    });
                                }
                            }
                            None => break,
                        }
                    }
                    event = submit_delay_elapsed_stream.next() => {
                        match event {
                            Some(()) => {
                                let completed = state.lock_mut().form.complete_submit();
                                if completed {
                                    debug_log!(DEBUG_CONTACT, "Contact form: Submitting -> Submitted");
                                    let confirmation_elapsed_relay = confirmation_elapsed_relay.clone();
                                    Task::start(async move {
                                        Timer::sleep(CONFIRMATION_DISPLAY_MS).await;
                                        confirmation_elapsed_relay.send(());
                                    });
                                }
                            }
                            None => break,
                        }
                    }
                    event = confirmation_elapsed_stream.next() => {
                        match event {
                            Some(()) => {
                                if state.lock_mut().form.dismiss_confirmation() {
                                    debug_log!(DEBUG_CONTACT, "Contact form: Submitted -> Idle");
                                }
                            }
                            None => break,
                        }
                    }
                }
            }
        });

        Self {
            state,
            field_edited_relay,
            submit_pressed_relay,
        }
    }

    fn field_value_signal(&self, field: ContactField) -> impl Signal<Item = String> + use<> {
        self.state
            .signal_ref(move |screen_state| screen_state.form.fields().get(field).to_owned())
            .dedupe_cloned()
    }

    fn is_submitted_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state
            .signal_ref(|screen_state| screen_state.form.is_submitted())
            .dedupe()
    }

    fn is_submitting_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state
            .signal_ref(|screen_state| screen_state.form.is_submitting())
            .dedupe()
    }

    fn rejection_signal(&self) -> impl Signal<Item = Option<String>> + use<> {
        self.state
            .signal_ref(|screen_state| {
                screen_state
                    .rejection
                    .as_ref()
                    .map(|rejection| rejection.to_string())
            })
            .dedupe_cloned()
    }

    fn edit_handler(&self, field: ContactField) -> impl FnMut(String) + use<> {
        let field_edited_relay = self.field_edited_relay.clone();
        move |text| field_edited_relay.send((field, text))
    }
}

pub fn page(content: &ContentStore) -> impl Element {
    let screen = ContactScreen::new();

    widgets::page_section(
        Column::new()
            .s(Gap::new().y(48))
            .item(
                Column::new()
                    .s(Align::new().center_x())
                    .s(Gap::new().y(12))
                    .item(El::new().s(Align::new().center_x()).child(widgets::page_title("Get In Touch")))
                    .item(El::new().s(Align::new().center_x()).child(widgets::body_text(
                        "Let's discuss your next project or just say hello",
                    ))),
            )
            .item(
                Row::new()
                    .multiline()
                    .s(Gap::both(48))
                    .s(Align::new().top())
                    .item(contact_information(content.personal(), content.social()))
                    .item(
                        El::new()
                            .s(Width::growable().min(320))
                            .child(widgets::card(El::new().child_signal({
                                let screen = screen.clone();
                                screen.is_submitted_signal().map(move |is_submitted| {
                                    if is_submitted {
                                        confirmation().unify()
                                    } else {
                                        contact_form(&screen).unify()
                                    }
                                })
                            }))),
                    ),
            )
            .after_remove(move |_| drop(screen)),
    )
}

fn contact_information(profile: &PersonalProfile, social: &[SocialLink]) -> impl Element {
    Column::new()
        .s(Width::fill().min(280).max(360))
        .s(Padding::all(32))
        .s(Gap::new().y(24))
        .s(RoundedCorners::all(16))
        .s(Font::new().color(theme::ON_ACCENT))
        .update_raw_el(|raw_el| raw_el.style("background", theme::HERO_GRADIENT))
        .item(
            El::new()
                .s(Font::new().size(24).weight(FontWeight::Bold))
                .child("Contact Information"),
        )
        .item(info_row(
            icons::MAIL,
            "Email",
            Link::new()
                .s(Font::new().color(theme::ON_ACCENT_SOFT))
                .label(profile.email.as_str())
                .to(profile.mailto_url()),
        ))
        .item(info_row(
            icons::PHONE,
            "Phone",
            Link::new()
                .s(Font::new().color(theme::ON_ACCENT_SOFT))
                .label(profile.phone.as_str())
                .to(profile.tel_url()),
        ))
        .item(info_row(
            icons::LOCATION,
            "Location",
            El::new()
                .s(Font::new().color(theme::ON_ACCENT_SOFT))
                .child(profile.location.as_str()),
        ))
        .item(
            Column::new()
                .s(Gap::new().y(12))
                .item(
                    El::new()
                        .s(Font::new().size(18).weight(FontWeight::SemiBold))
                        .child("Follow Me"),
                )
                .item(widgets::social_links(social)),
        )
}

fn info_row(glyph: &str, title: &str, value: impl Element) -> impl Element {
    Row::new()
        .s(Gap::new().x(16))
        .item(El::new().s(Font::new().size(22)).child(glyph))
        .item(
            Column::new()
                .s(Gap::new().y(2))
                .item(El::new().s(Font::new().weight(FontWeight::Medium)).child(title))
                .item(value),
        )
}

fn confirmation() -> impl Element {
    Column::new()
        .s(Padding::new().y(48))
        .s(Gap::new().y(12))
        .s(Align::new().center_x())
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Font::new().size(48).color(theme::SUCCESS))
                .child(icons::CHECK),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .child(widgets::section_title("Message Sent!")),
        )
        .item(El::new().s(Align::new().center_x()).child(widgets::body_text(
            "Thank you for your message. I'll get back to you as soon as possible.",
        )))
}

fn contact_form(screen: &ContactScreen) -> impl Element {
    Column::new()
        .s(Gap::new().y(24))
        .item(widgets::section_title("Send Me a Message"))
        .item(
            Row::new()
                .multiline()
                .s(Gap::both(24))
                .item(field_input(screen, ContactField::Name))
                .item(field_input(screen, ContactField::Email)),
        )
        .item(field_input(screen, ContactField::Subject))
        .item(message_input(screen))
        .item(submit_button(screen))
        .item_signal(screen.rejection_signal().map(|rejection| {
            rejection.map(|message| {
                El::new()
                    .s(Font::new().size(14).color(theme::ERROR))
                    .child(message)
            })
        }))
}

fn field_label(field: ContactField) -> impl Element {
    El::new()
        .s(Font::new()
            .size(14)
            .weight(FontWeight::Medium)
            .color_signal(theme::text_strong()))
        .child(format!("{} *", field.label()))
}

fn field_input(screen: &ContactScreen, field: ContactField) -> impl Element {
    Column::new()
        .s(Width::growable().min(240))
        .s(Gap::new().y(8))
        .item(field_label(field))
        .item(
            TextInput::new()
                .s(Width::fill())
                .s(Padding::new().x(16).y(12))
                .s(RoundedCorners::all(8))
                .s(Background::new().color_signal(theme::input_background()))
                .s(Font::new().color_signal(theme::text_strong()))
                .s(Borders::all_signal(
                    theme::border().map(|color| Border::new().width(1).color(color)),
                ))
                .label_hidden(field.label())
                .placeholder(
                    Placeholder::new(field.placeholder())
                        .s(Font::new().color_signal(theme::text_muted())),
                )
                .text_signal(screen.field_value_signal(field))
                .on_change(screen.edit_handler(field)),
        )
}

fn message_input(screen: &ContactScreen) -> impl Element {
    let field = ContactField::Message;
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(8))
        .item(field_label(field))
        .item(
            TextArea::new()
                .s(Width::fill())
                .s(Height::exact(160))
                .s(Padding::new().x(16).y(12))
                .s(RoundedCorners::all(8))
                .s(Background::new().color_signal(theme::input_background()))
                .s(Font::new().color_signal(theme::text_strong()))
                .s(Borders::all_signal(
                    theme::border().map(|color| Border::new().width(1).color(color)),
                ))
                .label_hidden(field.label())
                .placeholder(
                    Placeholder::new(field.placeholder())
                        .s(Font::new().color_signal(theme::text_muted())),
                )
                .text_signal(screen.field_value_signal(field))
                .on_change(screen.edit_handler(field)),
        )
}

fn submit_button(screen: &ContactScreen) -> impl Element {
    let is_submitting = || screen.is_submitting_signal();
    Button::new()
        .s(Width::fill())
        .s(Padding::new().y(14))
        .s(RoundedCorners::all(8))
        .s(Background::new().color_signal(is_submitting().map(|is_submitting| {
            if is_submitting {
                "rgb(147, 197, 253)"
            } else {
                theme::ACCENT_SOLID
            }
        })))
        .s(Font::new()
            .size(16)
            .weight(FontWeight::SemiBold)
            .center()
            .color(theme::ON_ACCENT))
        .s(Cursor::with_signal(is_submitting().map(|is_submitting| {
            Some(if is_submitting {
                CursorIcon::NotAllowed
            } else {
                CursorIcon::Pointer
            })
        })))
        .label_signal(is_submitting().map(|is_submitting| {
            if is_submitting {
                "Sending...".to_string()
            } else {
                format!("{} Send Message", icons::SEND)
            }
        }))
        .on_press({
            let submit_pressed_relay = screen.submit_pressed_relay.clone();
            move || submit_pressed_relay.send(())
        })
}
