//! Sending the daily lunch poll

use chrono::NaiveDate;
use fuksicore::config::network;
use fuksicore::{AppResult, LunchPoll, PollConfig, PollTarget};
use teloxide::prelude::*;
use teloxide::types::{InputPollOption, MessageId, ThreadId};
use teloxide::RequestError;

use crate::telegram::create_bot;

/// Sends `poll` to `target` with a single `sendPoll` request.
pub async fn send_lunch_poll(bot: &Bot, target: &PollTarget, poll: &LunchPoll) -> Result<Message, RequestError> {
    let options = poll.options.iter().map(|option| InputPollOption::new(option.clone()));

    let mut request = bot
        .send_poll(ChatId(target.chat_id), poll.question.clone(), options)
        .is_anonymous(poll.is_anonymous)
        .allows_multiple_answers(poll.allows_multiple_answers);
    if let Some(thread_id) = target.thread_id {
        request = request.message_thread_id(ThreadId(MessageId(thread_id)));
    }

    request.await
}

/// Builds the bot from `config` and posts the poll for the day after `today`.
pub async fn dispatch_lunch_poll(config: &PollConfig, today: NaiveDate) -> AppResult<Message> {
    let bot = create_bot(&config.bot_token, config.api_url.as_ref(), network::timeout())?;
    let target = PollTarget::from(config);
    let poll = LunchPoll::for_tomorrow(today).allowing_multiple_answers(config.multiple_answers);

    log::info!("Sending \"{}\" to chat {}", poll.question, target.chat_id);
    let message = send_lunch_poll(&bot, &target, &poll).await?;
    log::info!("Poll sent as message {}", message.id);

    Ok(message)
}

/// Loads the poll settings through `lookup` and dispatches the poll.
///
/// Configuration errors return before any request is made.
pub async fn run_lunch_poll<F>(lookup: F, today: NaiveDate) -> AppResult<Message>
where
    F: Fn(&str) -> Option<String>,
{
    let config = PollConfig::from_lookup(lookup)?;
    dispatch_lunch_poll(&config, today).await
}
