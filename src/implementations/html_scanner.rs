//! Single-pass structural scan of an HTML document.
//!
//! Markup goes through the html5ever tokenizer only, with no tree builder, so
//! every start tag in the source reaches [`ScanResult::handle_start_tag`]
//! exactly once and in source order. Close tags and text are never looked at.
//! `<script>` and `<style>` bodies are read as raw text, so markup inside them
//! is not counted.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue,
    TagKind,
    Token,
    TokenSink,
    TokenSinkResult,
    Tokenizer,
    TokenizerOpts,
};
use html5ever::tokenizer::states::RawKind;
use log::debug;

use crate::models::scan::ScanResult;

/// Token sink that forwards start tags to a [`ScanResult`].
#[derive(Default)]
struct StartTagSink {
    result: ScanResult,
    parse_errors: usize,
}

impl TokenSink for StartTagSink {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) if tag.kind == TagKind::StartTag => {
                let attrs: Vec<(&str, &str)> = tag.attrs
                    .iter()
                    .map(|attr| (&*attr.name.local, &*attr.value))
                    .collect();
                self.result.handle_start_tag(&tag.name, &attrs);

                match &*tag.name {
                    "script" => TokenSinkResult::RawData(RawKind::ScriptData),
                    "style" => TokenSinkResult::RawData(RawKind::Rawtext),
                    _ => TokenSinkResult::Continue,
                }
            }
            Token::ParseError(_) => {
                self.parse_errors += 1;
                TokenSinkResult::Continue
            }
            _ => TokenSinkResult::Continue,
        }
    }
}

/// Scan `html` and return everything found in its start tags.
pub fn scan_html(html: &str) -> ScanResult {
    let mut queue = BufferQueue::default();
    queue.push_back(StrTendril::from(html));

    let mut tokenizer = Tokenizer::new(StartTagSink::default(), TokenizerOpts::default());
    let _ = tokenizer.feed(&mut queue);
    tokenizer.end();

    let StartTagSink { result, parse_errors } = tokenizer.sink;
    if parse_errors > 0 {
        debug!("Tokenizer recovered from {} markup errors", parse_errors);
    }

    debug!(
        "Scanned {} images, {} links, {} videos, {} forms, {} buttons; {} issues",
        result.images.len(),
        result.links.len(),
        result.videos.len(),
        result.forms.len(),
        result.buttons.len(),
        result.issue_count()
    );

    result
}
