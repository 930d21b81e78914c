// region:    --- Imports
use dialoguer::{Input, Select};
use std::io;

// endregion: --- Imports

// region:    --- Console
/// 사용자 입출력
pub trait Console {
    /// 닫힌 목록에서 하나 선택, 선택한 위치 반환
    fn select(&mut self, prompt: &str, choices: &[String]) -> io::Result<usize>;

    /// 자유 입력
    fn input(&mut self, prompt: &str) -> io::Result<String>;

    /// 사용자에게 보여줄 메시지
    fn notify(&mut self, message: &str);
}

/// 터미널 구현체. 방향키와 Enter 로 선택한다.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn select(&mut self, prompt: &str, choices: &[String]) -> io::Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(choices)
            .default(0)
            .interact()
    }

    fn input(&mut self, prompt: &str) -> io::Result<String> {
        // 검증은 흐름 쪽에서 하므로 빈 입력도 그대로 돌려준다
        Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}
// endregion: --- Console
