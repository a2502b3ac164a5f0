use devlink_common::{RequestId, ReviewStatus};
use druid::widget::{
    Button, CrossAxisAlignment, Either, Flex, Label, LineBreaking, List, SizedBox, Spinner,
};
use druid::{Color, Widget, WidgetExt};

use crate::store::{AppState, RequestsScreen};
use crate::view_model::{RequestRow, UserCard};
use crate::{Event, EventSender};

const LINK_COLOR: Color = Color::rgb8(0x42, 0x85, 0xf4);

pub fn ui_builder(events_tx: EventSender) -> impl Widget<AppState> {
    Flex::row()
        .with_child(sidebar())
        .with_default_spacer()
        .with_flex_child(requests_screen(events_tx), 1.)
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .must_fill_main_axis(true)
        .padding(10.0)
}

fn sidebar() -> impl Widget<AppState> {
    Flex::column()
        .with_child(Label::dynamic(|data: &AppState, _| match &data.user {
            Some(user) => String::from("Signed in as ") + &user.full_name,
            None => String::from("Not signed in"),
        }))
        .with_default_spacer()
        .with_child(Label::new("Connections").with_text_size(24.0))
        .with_default_spacer()
        .with_flex_child(
            List::new(connection).lens(AppState::connections).scroll(),
            1.,
        )
        .with_default_spacer()
        .with_child(Label::dynamic(|data: &AppState, _| {
            format!("{} profiles left to discover", data.feed.len())
        }))
        .cross_axis_alignment(CrossAxisAlignment::Start)
}

fn connection() -> impl Widget<UserCard> {
    Flex::row()
        .with_child(Label::dynamic(|data: &UserCard, _| data.full_name.clone()))
        .with_default_spacer()
        .with_child(
            Label::dynamic(|data: &UserCard, _| skills_line(data))
                .with_text_color(druid::theme::DISABLED_TEXT_COLOR),
        )
        .padding(10.0)
        .background(druid::theme::BUTTON_DARK)
        .rounded(5.0)
        .padding(5.0)
}

fn requests_screen(events_tx: EventSender) -> impl Widget<AppState> {
    Either::new(
        |data: &AppState, _| data.requests_screen() == RequestsScreen::Loading,
        loading_screen(),
        Either::new(
            |data: &AppState, _| data.requests_screen() == RequestsScreen::Empty,
            caught_up_screen(),
            request_list(events_tx),
        ),
    )
}

fn loading_screen() -> impl Widget<AppState> {
    Flex::column()
        .with_child(Spinner::new())
        .with_default_spacer()
        .with_child(Label::new("Checking for requests…").with_text_size(24.0))
        .center()
}

fn caught_up_screen() -> impl Widget<AppState> {
    Flex::column()
        .with_child(Label::new("You're All Caught Up!").with_text_size(36.0))
        .with_default_spacer()
        .with_child(
            Label::new(
                "No connection requests at the moment. Come back later or \
                 explore new users to connect with.",
            )
            .with_line_break_mode(LineBreaking::WordWrap),
        )
        .center()
}

fn request_list(events_tx: EventSender) -> impl Widget<AppState> {
    Flex::column()
        .with_child(Label::new("Connection Requests").with_text_size(36.0))
        .with_default_spacer()
        .with_flex_child(
            List::new(move || request_row(events_tx.clone()))
                .with_spacing(10.0)
                .lens(AppState::requests)
                .scroll(),
            1.,
        )
        .cross_axis_alignment(CrossAxisAlignment::Start)
}

fn request_row(events_tx: EventSender) -> impl Widget<RequestRow> {
    let accept = review_button("Accept", ReviewStatus::Accepted, events_tx.clone());
    let reject = review_button("Reject", ReviewStatus::Rejected, events_tx);
    Flex::row()
        .with_flex_child(profile_summary(), 1.)
        .with_default_spacer()
        .with_child(accept)
        .with_default_spacer()
        .with_child(reject)
        .cross_axis_alignment(CrossAxisAlignment::Start)
        .padding(10.0)
        .background(druid::theme::BUTTON_DARK)
        .rounded(5.0)
}

fn profile_summary() -> impl Widget<RequestRow> {
    Flex::column()
        .with_child(
            Label::dynamic(|data: &RequestRow, _| {
                if data.from.is_verified {
                    data.from.full_name.clone() + " ✔"
                } else {
                    data.from.full_name.clone()
                }
            })
            .with_text_size(20.0),
        )
        .with_child(Either::new(
            |data: &RequestRow, _| data.from.age_gender.is_some(),
            Label::dynamic(|data: &RequestRow, _| {
                data.from.age_gender.clone().unwrap_or_default()
            })
            .with_text_color(druid::theme::DISABLED_TEXT_COLOR),
            SizedBox::empty(),
        ))
        .with_child(about_section())
        .with_child(Either::new(
            |data: &RequestRow, _| data.from.skills.is_empty(),
            SizedBox::empty(),
            Label::dynamic(|data: &RequestRow, _| skills_line(&data.from))
                .with_text_color(druid::theme::DISABLED_TEXT_COLOR),
        ))
        .cross_axis_alignment(CrossAxisAlignment::Start)
}

fn about_section() -> impl Widget<RequestRow> {
    Flex::row()
        .with_child(
            Label::dynamic(|data: &RequestRow, _| {
                if data.show_full_about || !data.from.about_truncated {
                    data.from.about.clone()
                } else {
                    data.from.about_preview.clone()
                }
            })
            .with_line_break_mode(LineBreaking::WordWrap),
        )
        .with_child(Either::new(
            |data: &RequestRow, _| data.from.about_truncated && !data.show_full_about,
            Label::new("know more")
                .with_text_color(LINK_COLOR)
                .on_click(|_, data: &mut RequestRow, _| data.show_full_about = true),
            SizedBox::empty(),
        ))
        .cross_axis_alignment(CrossAxisAlignment::Start)
}

fn review_button(
    text: &'static str,
    status: ReviewStatus,
    events_tx: EventSender,
) -> impl Widget<RequestRow> {
    Button::new(text)
        .on_click(move |_, data: &mut RequestRow, _| {
            // A pending row takes no further clicks until the call resolves.
            data.review_pending = true;
            let _ = events_tx.send(Event::Review {
                status,
                id: RequestId(data.id.clone()),
            });
        })
        .disabled_if(|data: &RequestRow, _| data.review_pending)
}

fn skills_line(card: &UserCard) -> String {
    card.skills
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}
