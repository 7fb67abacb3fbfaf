pub(crate) mod client;

pub(crate) use client::BrowserUsers;
