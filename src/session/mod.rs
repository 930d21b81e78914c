/// 대화형 세션
/// 메뉴(등록 / 입찰 / 종료)를 보여주고, 각 흐름이 끝나면 다시 메뉴로 돌아온다.
// region:    --- Imports
use crate::bidding::model::{parse_starting_bid, Category, NewListing};
use crate::bidding::resolver::{resolve_bid, BidDecision, BidRejection};
use crate::error::AppError;
use crate::repository::ListingRepository;
use std::io;
use tracing::{debug, info};

pub mod console;

pub use console::{Console, TerminalConsole};

// endregion: --- Imports

// region:    --- Menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Post,
    Bid,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [MenuAction::Post, MenuAction::Bid, MenuAction::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Post => "POST AN ITEM",
            MenuAction::Bid => "BID ON AN ITEM",
            MenuAction::Exit => "EXIT",
        }
    }
}
// endregion: --- Menu

// region:    --- Outcomes
/// 입찰 흐름 결과
#[derive(Debug, Clone, PartialEq)]
pub enum BidOutcome {
    Accepted {
        listing_id: i64,
        amount: f64,
        rows_affected: u64,
    },
    Rejected(BidRejection),
    NoListings,
}
// endregion: --- Outcomes

// region:    --- Session
pub struct Session<'a, R, C> {
    repository: &'a R,
    console: C,
}

impl<'a, R, C> Session<'a, R, C>
where
    R: ListingRepository,
    C: Console,
{
    pub fn new(repository: &'a R, console: C) -> Self {
        Self {
            repository,
            console,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// 종료를 선택할 때까지 반복. 하위 흐름의 오류는 그대로 전파한다.
    pub async fn run(&mut self) -> Result<(), AppError> {
        loop {
            match self.prompt_action()? {
                MenuAction::Post => {
                    self.post_item().await?;
                }
                MenuAction::Bid => {
                    self.bid_item().await?;
                }
                MenuAction::Exit => {
                    info!("{:<12} --> 세션 종료", "Session");
                    return Ok(());
                }
            }
        }
    }

    fn prompt_action(&mut self) -> Result<MenuAction, AppError> {
        let labels = labels(MenuAction::ALL.iter().map(MenuAction::label));
        let index = self.console.select("What would you like to do?", &labels)?;
        let action = pick(&MenuAction::ALL, index)?;
        debug!("{:<12} --> 메뉴 선택: {:?}", "Session", action);
        Ok(*action)
    }

    /// 1. 상품 등록
    pub async fn post_item(&mut self) -> Result<u64, AppError> {
        let name = self.prompt_name()?;
        let starting_bid = self.prompt_starting_bid()?;
        let category = self.prompt_category()?;

        let listing = NewListing {
            name,
            category,
            starting_bid,
        };

        self.console
            .notify("Inserting a new auction item into table...");
        let rows_affected = self.repository.create(&listing).await?;
        self.console
            .notify(&format!("{rows_affected} auction item inserted!"));
        Ok(rows_affected)
    }

    fn prompt_name(&mut self) -> Result<String, AppError> {
        loop {
            // 입력한 그대로 저장하고, 공백만 있는 이름만 거절한다
            let name = self.console.input("What is your item called?")?;
            if !name.trim().is_empty() {
                return Ok(name);
            }
            self.console.notify("Item name cannot be empty.");
        }
    }

    // 숫자가 아니면 같은 질문을 반복
    fn prompt_starting_bid(&mut self) -> Result<f64, AppError> {
        loop {
            let raw = self
                .console
                .input("What price would you like to start the bidding?")?;
            match parse_starting_bid(&raw) {
                Ok(amount) => return Ok(amount),
                Err(e) => self
                    .console
                    .notify(&format!("Invalid starting bid: {e}. Please enter a number.")),
            }
        }
    }

    fn prompt_category(&mut self) -> Result<Category, AppError> {
        let labels = labels(Category::ALL.iter().map(Category::as_str));
        let index = self.console.select("What type of item is it?", &labels)?;
        Ok(*pick(&Category::ALL, index)?)
    }

    /// 2. 입찰
    pub async fn bid_item(&mut self) -> Result<BidOutcome, AppError> {
        self.console.notify("Selecting all auction item(s)...");
        let listings = self.repository.read_all().await?;
        if listings.is_empty() {
            self.console
                .notify("There are no auction items to bid on yet.");
            return Ok(BidOutcome::NoListings);
        }

        // 이름으로 보여주되 선택은 위치(= id)로 한다
        let names = labels(listings.iter().map(|l| l.name.as_str()));
        let index = self
            .console
            .select("Please select an auction item.", &names)?;
        let listing = pick(&listings, index)?;

        let raw = self.console.input("How much would you like to bid?")?;
        match resolve_bid(listing, &raw) {
            BidDecision::Accept { listing_id, amount } => {
                let rows_affected = self
                    .repository
                    .update_highest_bid(listing_id, amount)
                    .await?;
                self.console
                    .notify(&format!("{rows_affected} auction item updated!"));
                Ok(BidOutcome::Accepted {
                    listing_id,
                    amount,
                    rows_affected,
                })
            }
            BidDecision::Reject(rejection) => {
                self.console.notify(&rejection.to_string());
                Ok(BidOutcome::Rejected(rejection))
            }
        }
    }
}

fn labels<'s>(items: impl Iterator<Item = &'s str>) -> Vec<String> {
    items.map(str::to_string).collect()
}

fn pick<T>(items: &[T], index: usize) -> io::Result<&T> {
    items.get(index).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("selection {index} is out of range"),
        )
    })
}
// endregion: --- Session
