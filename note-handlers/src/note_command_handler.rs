//! Note command handler: classifies an incoming message and runs the matching note
//! operation, or returns `Continue` so the chain falls through to the AI handler.
//!
//! Classification is case-insensitive on the trimmed message; note content is taken
//! from the original-case message so the user's text is saved exactly as typed.
//! Validation problems and store failures are both answered as chat replies; this
//! handler never fails the turn.

use async_trait::async_trait;
use storage::{NoteRecord, NoteRepository};
use tracing::{info, instrument, warn};
use wabot_core::{Handler, HandlerResponse, Message, Result};

const HELP_COMMANDS: [&str; 3] = ["help", "bantuan", "menu"];
const LIST_COMMANDS: [&str; 3] = ["list", "catatan", "daftar"];
const SAVE_PREFIXES: [&str; 2] = ["simpan ", "catat "];
const DELETE_PREFIX: &str = "hapus ";

const HELP_MESSAGE: &str = "🤖 *GOPOS Bot - Menu Bantuan*

📝 *Catatan:*
• simpan [isi] - Simpan catatan baru
• catat [isi] - Sama dengan simpan
• list - Lihat semua catatan
• hapus [nomor] - Hapus catatan

🧠 *AI Assistant (GOPOS AI):*
• Ketik pertanyaan apapun
• AI mengingat 10 pesan terakhir
• Contoh: \"ongkir bandung ke jakarta 5kg\"

❓ *Bantuan:*
• help - Tampilkan menu ini

💡 Contoh: \"simpan beli susu besok\"
";

#[derive(Clone)]
pub struct NoteCommandHandler {
    notes: NoteRepository,
}

impl NoteCommandHandler {
    pub fn new(notes: NoteRepository) -> Self {
        Self { notes }
    }

    /// The static help menu.
    pub fn help_message() -> &'static str {
        HELP_MESSAGE
    }

    /// Saves a note; rejects blank content without touching the store.
    pub async fn handle_save(&self, user_phone: &str, content: &str) -> String {
        if content.is_empty() {
            return "❌ Isi catatan kosong. Contoh: *simpan beli beras*".to_string();
        }

        let note = NoteRecord::new(user_phone, content);
        match self.notes.save(&note).await {
            Ok(()) => {
                info!(phone = %user_phone, note_id = %note.id, "Note saved");
                format!("✅ Tersimpan!\n\n📝 {}", content)
            }
            Err(e) => {
                warn!(phone = %user_phone, error = %e, "Failed to save note");
                format!("❌ Gagal menyimpan: {}", e)
            }
        }
    }

    /// Renders the user's notes as a 1-based numbered list in store order.
    pub async fn handle_list(&self, user_phone: &str) -> String {
        let notes = match self.notes.find_by_user(user_phone).await {
            Ok(notes) => notes,
            Err(e) => {
                warn!(phone = %user_phone, error = %e, "Failed to list notes");
                return format!("❌ Gagal mengambil catatan: {}", e);
            }
        };

        if notes.is_empty() {
            return "📭 Belum ada catatan.\n\nKetik *simpan [isi]* untuk menyimpan catatan pertamamu!"
                .to_string();
        }

        let mut out = String::from("📂 *Daftar Catatan:*\n\n");
        for (i, note) in notes.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, note.content));
        }
        out.push_str("\n💡 Ketik *hapus [nomor]* untuk menghapus");
        out
    }

    /// Deletes by user-facing ordinal. The ordinal is resolved against the same
    /// listing order the user just saw, then the delete goes by stored id.
    pub async fn handle_delete(&self, user_phone: &str, num_str: &str) -> String {
        let num: usize = match num_str.trim().parse() {
            Ok(n) if n >= 1 => n,
            _ => return "❌ Format salah. Contoh: *hapus 1*".to_string(),
        };

        let notes = match self.notes.find_by_user(user_phone).await {
            Ok(notes) => notes,
            Err(e) => {
                warn!(phone = %user_phone, error = %e, "Failed to fetch notes for delete");
                return format!("❌ Gagal: {}", e);
            }
        };

        if num > notes.len() {
            return format!(
                "❌ Catatan nomor {} tidak ditemukan. Kamu punya {} catatan.",
                num,
                notes.len()
            );
        }

        let note = &notes[num - 1];
        match self.notes.delete_by_id(&note.id).await {
            Ok(_) => {
                info!(phone = %user_phone, note_id = %note.id, "Note deleted");
                format!("🗑️ Catatan #{} dihapus:\n\n~~{}~~", num, note.content)
            }
            Err(e) => {
                warn!(phone = %user_phone, error = %e, "Failed to delete note");
                format!("❌ Gagal menghapus: {}", e)
            }
        }
    }
}

#[async_trait]
impl Handler for NoteCommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let msg = message.content.trim();
        let msg_lower = msg.to_lowercase();
        let phone = &message.from.phone;

        if HELP_COMMANDS.contains(&msg_lower.as_str()) {
            return Ok(HandlerResponse::Reply(Self::help_message().to_string()));
        }

        for prefix in SAVE_PREFIXES {
            if msg_lower.starts_with(prefix) {
                let content = msg[prefix.len()..].trim();
                return Ok(HandlerResponse::Reply(
                    self.handle_save(phone, content).await,
                ));
            }
        }

        if LIST_COMMANDS.contains(&msg_lower.as_str()) {
            return Ok(HandlerResponse::Reply(self.handle_list(phone).await));
        }

        if msg_lower.starts_with(DELETE_PREFIX) {
            let num_str = msg[DELETE_PREFIX.len()..].trim();
            return Ok(HandlerResponse::Reply(
                self.handle_delete(phone, num_str).await,
            ));
        }

        // Not a command; let the AI fallback take it.
        Ok(HandlerResponse::Continue)
    }
}
