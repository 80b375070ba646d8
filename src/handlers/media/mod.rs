//! Media handlers module
//!
//! Downloads photo and document attachments into memory and replies with
//! the decoded QR payload or the not-found text.

use std::io::Cursor;

use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{ChatId, FileId, Message};
use tracing::{debug, warn};

use crate::qr;
use crate::texts;
use crate::utils::errors::{Result, ScanBuddyError};

/// Handle a photo attachment: scan the highest-resolution variant.
pub async fn handle_photo(bot: Bot, msg: Message) -> Result<()> {
    let best = msg
        .photo()
        .and_then(|sizes| {
            sizes
                .iter()
                .max_by_key(|size| u64::from(size.width) * u64::from(size.height))
        })
        .ok_or_else(|| ScanBuddyError::InvalidInput("No photo in message".to_string()))?;

    debug!(
        chat_id = msg.chat.id.0,
        width = best.width,
        height = best.height,
        "Scanning photo"
    );

    let bytes = download(&bot, best.file.id.clone()).await?;
    reply_with_scan(bot, msg.chat.id, bytes).await
}

/// Handle a document attachment: scan the raw file bytes.
pub async fn handle_document(bot: Bot, msg: Message) -> Result<()> {
    let document = msg
        .document()
        .ok_or_else(|| ScanBuddyError::InvalidInput("No document in message".to_string()))?;

    debug!(
        chat_id = msg.chat.id.0,
        file_name = ?document.file_name,
        "Scanning document"
    );

    let bytes = download(&bot, document.file.id.clone()).await?;
    reply_with_scan(bot, msg.chat.id, bytes).await
}

/// Download one Telegram file into memory.
async fn download(bot: &Bot, file_id: FileId) -> Result<Vec<u8>> {
    let file = bot.get_file(file_id).await?;
    let mut buffer = Cursor::new(Vec::new());
    bot.download_file(&file.path, &mut buffer).await?;
    Ok(buffer.into_inner())
}

/// Run the decode policy off the async runtime and report the outcome.
///
/// Malformed uploads are reported to the user exactly like images without
/// a code; only the log line differs.
async fn reply_with_scan(bot: Bot, chat_id: ChatId, bytes: Vec<u8>) -> Result<()> {
    let reply = match tokio::task::spawn_blocking(move || qr::decode_payload(&bytes)).await? {
        Ok(Some(payload)) => texts::qr_recognized(&payload),
        Ok(None) => texts::QR_NOT_FOUND.to_string(),
        Err(error) => {
            warn!(chat_id = chat_id.0, error = %error, "Upload is not a decodable image");
            texts::QR_NOT_FOUND.to_string()
        }
    };

    bot.send_message(chat_id, reply).await?;
    Ok(())
}
