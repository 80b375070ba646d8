//! User-facing message texts
//!
//! The bot speaks Russian to end users; every outbound string lives here so
//! handlers and the routing table share one source of truth for button
//! labels and replies.

/// Reply-keyboard button labels. The routing table matches message text
/// against these exact strings.
pub const BUTTON_GREETING: &str = "Привет";
pub const BUTTON_SCAN: &str = "Сканировать";
pub const BUTTON_CONTACT: &str = "Связь с разработчиком";
pub const BUTTON_HELP: &str = "Помощь";

/// Introduction sent in response to /start.
pub const START_GREETING: &str = "Привет! Я простенький бот, который может сканировать QR коды. Вот список моих команд:\n\
    Привет - просто поздороваться\n\
    Сканировать - начать сканирование QR-кода\n\
    Помощь - получить справку о возможностях бота\n\
    Связь с разработчиком - отправить отчет о ошибке или баге";

/// Capability list sent for /help and the help button.
pub const COMMAND_LIST: &str = "Вот список моих команд:\n\
    Привет - просто поздороваться\n\
    Сканировать - начать сканирование QR-кода\n\
    Помощь - получить справку о возможностях бота\n\
    Связь с разработчиком - отправить отчет о ошибке или баге";

pub const GREETING_REPLY: &str = "Привет, как делишки?";

pub const SCAN_READY: &str = "Я готов сканировать твой QR код. Присылай его!";

pub const BUG_REPORT_PROMPT: &str = "Опишите ошибку или баг, который вы обнаружили.";

pub const BUG_REPORT_THANKS: &str = "Спасибо за ваш отчет! Он был отправлен администратору.";

pub const QR_NOT_FOUND: &str = "QR код не найден на изображении.";

pub const HELP_HINT: &str = "Для справки по возможностям бота напишите команду /help";

/// Reply sent when a barcode payload was decoded from an upload.
pub fn qr_recognized(payload: &str) -> String {
    format!("QR код распознан: {payload}")
}

/// Message forwarded to the administrator chat for one bug report.
pub fn bug_report(reporter: &str, body: &str) -> String {
    format!("Багрепорт от {reporter}:\n{body}")
}
