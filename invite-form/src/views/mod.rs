use crate::state::{InviteUserForm, Msg, Role, NAME_INPUT_ID};
use admin_ui::{
    component::{self, button, form, text},
    theme,
    widget::*,
};
use iced::{widget::Space, Alignment, Length};

/// Id of the email input. Nothing focuses it programmatically.
const EMAIL_INPUT_ID: &str = "invite_user_email";

/// Invite dialog wrapped in a modal card, with a title and a close button.
pub fn invite_user_modal_view(form: &InviteUserForm) -> Element<'_, Msg> {
    let header = Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(text::title("Invite user"))
        .push(Space::with_width(Length::Fill))
        .push(
            button::ghost("✕")
                .on_press(Msg::Cancel)
                .width(Length::Shrink),
        );

    let content = Column::new()
        .push(header)
        .push(invite_user_view(form))
        .spacing(15)
        .padding(20.0)
        .width(Length::Fixed(500.0));

    component::dialog(content).into()
}

/// Name and email inputs, role radio group and the Invite/Cancel buttons.
pub fn invite_user_view(form: &InviteUserForm) -> Element<'_, Msg> {
    let state = form.state();

    let name_input = form::Form::new("Name", &state.values.name, Msg::NameChanged)
        .maybe_error(state.errors.name.as_deref())
        .on_submit(Msg::Submit)
        .id(text_input::Id::new(NAME_INPUT_ID))
        .size(16)
        .padding(10);

    let email_input = form::Form::new("Email", &state.values.email, Msg::EmailChanged)
        .maybe_error(state.errors.email.as_deref())
        .on_submit(Msg::Submit)
        .id(text_input::Id::new(EMAIL_INPUT_ID))
        .size(16)
        .padding(10);

    let role = |r: Role| Radio::new(r.label(), r, Some(state.values.admin), Msg::RoleSelected);
    let roles = Column::new()
        .spacing(10)
        .push(text::label("role").style(theme::text::muted))
        .push(role(Role::User))
        .push(role(Role::Admin))
        .push_maybe(
            state
                .errors
                .admin
                .as_deref()
                .map(|e| text::caption(e).style(theme::text::danger)),
        );

    let footer = Row::new()
        .spacing(10)
        .push(Space::with_width(Length::Fill))
        .push(
            button::primary("Invite")
                .on_press(Msg::Submit)
                .width(Length::Fixed(120.0)),
        )
        .push(
            button::secondary("Cancel")
                .on_press(Msg::Cancel)
                .width(Length::Fixed(120.0)),
        );

    Column::new()
        .push(name_input)
        .push(email_input)
        .push(roles)
        .push(footer)
        .spacing(15)
        .into()
}
