mod browsing;
mod language;
mod terminal_session;
