//! 세션 테스트용 메모리 저장소와 스크립트 콘솔
#![allow(dead_code)]

use async_trait::async_trait;
use great_bay::bidding::model::{Category, Listing, NewListing};
use great_bay::error::StoreError;
use great_bay::repository::ListingRepository;
use great_bay::session::Console;
use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

// region:    --- Test Doubles

/// 메모리 저장소 (호출 기록 포함)
#[derive(Default)]
pub struct MemoryRepository {
    state: Mutex<MemoryState>,
    broken: bool,
}

#[derive(Default)]
pub struct MemoryState {
    listings: Vec<Listing>,
    created: Vec<NewListing>,
    updates: Vec<(i64, f64)>,
    next_id: i64,
}

impl MemoryRepository {
    pub fn broken() -> Self {
        Self {
            broken: true,
            ..Self::default()
        }
    }

    pub fn seed(&self, name: &str, category: Category, starting_bid: f64, highest_bid: f64) -> i64 {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let id = state.next_id;
        state.listings.push(Listing {
            id,
            name: name.to_string(),
            category,
            starting_bid,
            highest_bid,
        });
        id
    }

    pub fn listings(&self) -> Vec<Listing> {
        self.state.lock().unwrap().listings.clone()
    }

    pub fn created(&self) -> Vec<NewListing> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn updates(&self) -> Vec<(i64, f64)> {
        self.state.lock().unwrap().updates.clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.broken {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        Ok(())
    }
}

#[async_trait]
impl ListingRepository for MemoryRepository {
    async fn create(&self, listing: &NewListing) -> Result<u64, StoreError> {
        self.check()?;
        self.state.lock().unwrap().created.push(listing.clone());
        self.seed(
            &listing.name,
            listing.category,
            listing.starting_bid,
            listing.highest_bid(),
        );
        Ok(1)
    }

    async fn read_all(&self) -> Result<Vec<Listing>, StoreError> {
        self.check()?;
        Ok(self.listings())
    }

    async fn update_highest_bid(&self, id: i64, highest_bid: f64) -> Result<u64, StoreError> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.updates.push((id, highest_bid));
        let mut rows = 0;
        for listing in state.listings.iter_mut().filter(|l| l.id == id) {
            listing.highest_bid = highest_bid;
            rows += 1;
        }
        Ok(rows)
    }
}

#[derive(Debug)]
pub enum Reply {
    Pick(usize),
    Type(String),
}

impl Reply {
    pub fn text(text: &str) -> Self {
        Reply::Type(text.to_string())
    }
}

/// 미리 정해진 응답을 순서대로 돌려주는 콘솔
#[derive(Default)]
pub struct ScriptedConsole {
    pub replies: VecDeque<Reply>,
    pub offered: Vec<(String, Vec<String>)>,
    pub inputs: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn said(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }
}

impl Console for ScriptedConsole {
    fn select(&mut self, prompt: &str, choices: &[String]) -> io::Result<usize> {
        self.offered.push((prompt.to_string(), choices.to_vec()));
        match self.replies.pop_front() {
            Some(Reply::Pick(index)) => Ok(index),
            Some(other) => panic!("expected a selection for {prompt:?}, got {other:?}"),
            None => Err(io::Error::from(io::ErrorKind::UnexpectedEof)),
        }
    }

    fn input(&mut self, prompt: &str) -> io::Result<String> {
        self.inputs.push(prompt.to_string());
        match self.replies.pop_front() {
            Some(Reply::Type(text)) => Ok(text),
            Some(other) => panic!("expected text for {prompt:?}, got {other:?}"),
            None => Err(io::Error::from(io::ErrorKind::UnexpectedEof)),
        }
    }

    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

// endregion: --- Test Doubles
