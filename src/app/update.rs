// SPDX-License-Identifier: MPL-2.0
//! Message handling: feed effects are turned into async tasks here.

use super::{App, Message};
use crate::api;
use crate::media;
use crate::ui::feed;
use iced::Task;

pub(super) fn handle_feed_message(app: &mut App, message: feed::Message) -> Task<Message> {
    let effect = app.feed.handle_message(message, &app.i18n);
    run_effect(&app.api, effect)
}

/// Performs a feed effect by spawning the matching async work.
pub(super) fn run_effect(api: &api::Client, effect: feed::Effect) -> Task<Message> {
    match effect {
        feed::Effect::None => Task::none(),
        feed::Effect::FetchPage(page) => {
            let client = api.clone();
            Task::perform(async move { client.fetch_page(page).await }, |result| {
                Message::Feed(feed::Message::PageLoaded(result))
            })
        }
        feed::Effect::FetchThumbnails(requests) => {
            Task::batch(requests.into_iter().map(|request| {
                let client = api.clone();
                let index = request.index;
                Task::perform(
                    async move {
                        let bytes = client.fetch_bytes(&request.url).await?;
                        media::decode_image(&bytes)
                    },
                    move |result| Message::Feed(feed::Message::ThumbnailLoaded { index, result }),
                )
            }))
        }
    }
}
