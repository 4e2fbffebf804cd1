use clap::Parser;

/// Long-running /canteens bot
#[derive(Parser, Debug)]
#[command(name = "fuksibot")]
#[command(author, version, about = "Telegram bot listing Otaniemi canteens, menus and opening hours", long_about = None)]
pub struct BotCli {}

/// One-shot lunch poll sender, meant to be run from cron
#[derive(Parser, Debug)]
#[command(name = "lunch-poll")]
#[command(author, version, about = "Post tomorrow's lunch poll to the configured Telegram chat", long_about = None)]
pub struct PollCli {}

impl BotCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl PollCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        assert!(BotCli::try_parse_from(["fuksibot"]).is_ok());
        assert!(PollCli::try_parse_from(["lunch-poll"]).is_ok());
    }

    #[test]
    fn test_rejects_unknown_flags() {
        assert!(BotCli::try_parse_from(["fuksibot", "--webhook"]).is_err());
        assert!(PollCli::try_parse_from(["lunch-poll", "extra"]).is_err());
    }

    #[test]
    fn test_version_flag_exits_early() {
        let err = PollCli::try_parse_from(["lunch-poll", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }
}
