//! In-memory transport for exercising the router without Telegram

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use teloxide::types::{ChatId, MessageId};

use crate::errors::DeliveryError;
use crate::transport::{MessageRef, Render, Transport};

/// One outbound call, as the router made it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Send { chat: ChatId, render: Render, sent: MessageRef },
    Edit { message: MessageRef, render: Render },
    StripKeyboard { message: MessageRef },
    SendToAdmin { admin: ChatId, text: String },
}

/// RecordingTransport keeps every call in order and hands out increasing message ids
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    next_message_id: AtomicI32,
    fail_admin: AtomicBool,
    fail_strip: AtomicBool,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_message_id: AtomicI32::new(100),
            fail_admin: AtomicBool::new(false),
            fail_strip: AtomicBool::new(false),
        }
    }

    /// Make every admin send fail after being recorded
    pub fn fail_admin_sends(&self) {
        self.fail_admin.store(true, Ordering::SeqCst);
    }

    /// Make every keyboard strip fail after being recorded
    pub fn fail_keyboard_strips(&self) {
        self.fail_strip.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, chat: ChatId, render: &Render) -> Result<MessageRef, DeliveryError> {
        let sent = MessageRef {
            chat,
            id: MessageId(self.next_message_id.fetch_add(1, Ordering::SeqCst)),
        };
        self.record(Call::Send {
            chat,
            render: render.clone(),
            sent,
        });
        Ok(sent)
    }

    async fn edit(&self, message: MessageRef, render: &Render) -> Result<(), DeliveryError> {
        self.record(Call::Edit {
            message,
            render: render.clone(),
        });
        Ok(())
    }

    async fn strip_keyboard(&self, message: MessageRef) -> Result<(), DeliveryError> {
        self.record(Call::StripKeyboard { message });
        if self.fail_strip.load(Ordering::SeqCst) {
            return Err(DeliveryError::Rejected("strip failed".to_string()));
        }
        Ok(())
    }

    async fn send_to_admin(&self, admin: ChatId, text: &str) -> Result<(), DeliveryError> {
        self.record(Call::SendToAdmin {
            admin,
            text: text.to_string(),
        });
        if self.fail_admin.load(Ordering::SeqCst) {
            return Err(DeliveryError::Rejected("admin chat unreachable".to_string()));
        }
        Ok(())
    }
}
