//! Synthetic data standing in for a chat backend.

pub mod lorem;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::{AvatarExhaustion, MockDataConfig, ValidateExt};
use crate::error::Result;
use crate::models::{Chat, ChatsSnapshot, Message, User};

/// Produces the current user, filters and chat rows without any I/O
#[derive(Debug, Clone, Default)]
pub struct MockDataProvider {
    config: MockDataConfig,
}

impl MockDataProvider {
    /// Build a provider from a validated config
    pub fn new(config: MockDataConfig) -> Result<Self> {
        config.validate_input()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MockDataConfig {
        &self.config
    }

    pub fn fetch_current_user(&self) -> User {
        User::new(self.config.current_user.as_str())
    }

    pub fn fetch_filters(&self) -> Vec<String> {
        self.config.filters.clone()
    }

    /// Generate `count` chats using the thread-local RNG
    pub fn fetch_chats(&self, count: usize) -> Vec<Chat> {
        self.fetch_chats_with(&mut rand::thread_rng(), count)
    }

    /// Generate `count` chats from the given RNG.
    ///
    /// Each chat gets an avatar with probability 0.5, drawn from a pool
    /// shuffled once per call. The last message is always read and written
    /// by either the current user or the peer with equal odds.
    pub fn fetch_chats_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> Vec<Chat> {
        let current_user = self.fetch_current_user();
        let peer = User::new(self.config.peer_user.as_str());
        let mut avatars = AvatarPool::new(&self.config.avatars, self.config.avatar_exhaustion, rng);

        (0..count)
            .map(|_| {
                let avatar = if rng.gen_bool(0.5) {
                    avatars.next(rng)
                } else {
                    None
                };
                let name = lorem::words(rng.gen_range(self.config.name_words.as_range()));
                let text = lorem::words(rng.gen_range(self.config.text_words.as_range()));
                let author = if rng.gen_bool(0.5) {
                    current_user.clone()
                } else {
                    peer.clone()
                };

                Chat {
                    avatar,
                    name,
                    last_message: Message {
                        text,
                        date: self.config.placeholder_date.clone(),
                        is_read: true,
                        author,
                    },
                    unread_count: self.config.unread_count,
                }
            })
            .collect()
    }

    /// User, filters and chats, fetched in that order
    pub fn fetch_snapshot(&self, count: usize) -> ChatsSnapshot {
        self.fetch_snapshot_with(&mut rand::thread_rng(), count)
    }

    pub fn fetch_snapshot_with<R: Rng + ?Sized>(&self, rng: &mut R, count: usize) -> ChatsSnapshot {
        ChatsSnapshot {
            current_user: self.fetch_current_user(),
            filters: self.fetch_filters(),
            chats: self.fetch_chats_with(rng, count),
        }
    }
}

/// Shuffled view over the configured avatar URLs
struct AvatarPool<'a> {
    urls: Vec<&'a str>,
    position: usize,
    exhaustion: AvatarExhaustion,
}

impl<'a> AvatarPool<'a> {
    fn new<R: Rng + ?Sized>(urls: &'a [String], exhaustion: AvatarExhaustion, rng: &mut R) -> Self {
        let mut urls: Vec<&str> = urls.iter().map(String::as_str).collect();
        urls.shuffle(rng);
        Self {
            urls,
            position: 0,
            exhaustion,
        }
    }

    fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<String> {
        if self.urls.is_empty() {
            return None;
        }
        if self.position == self.urls.len() {
            match self.exhaustion {
                AvatarExhaustion::Placeholder => return None,
                AvatarExhaustion::Reshuffle => {
                    self.urls.shuffle(rng);
                    self.position = 0;
                }
            }
        }
        let url = self.urls[self.position].to_string();
        self.position += 1;
        Some(url)
    }
}
