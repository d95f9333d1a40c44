use colored::*;

use super::console::Console;
use super::state::ChatState;

pub const SETUP_HEADER: &str = "=== NEXA AI ===";
pub const SETUP_SUBTITLE: &str = "Sistema Operativo Inteligente";
pub const AUTH_HEADER: &str = "=== Inicio de Sesión ===";
pub const CHAT_HEADER: &str = "=== NEXA Chat ===";

pub const OPTION_PROMPT: &str = "Seleccione una opción: ";
pub const EMAIL_PROMPT: &str = "Email: ";
pub const PASSWORD_PROMPT: &str = "Contraseña: ";
pub const MESSAGE_PROMPT: &str = "Escribe tu mensaje: ";

pub const INVALID_OPTION: &str = "Opción no válida. Intente de nuevo.";
pub const SIGNING_IN: &str = "Iniciando sesión...";
pub const FAREWELL: &str = "¡Hasta luego!";

/// Prints the main menu. The option prompt is shown by the read that follows.
pub fn show_setup<C: Console + ?Sized>(console: &mut C) {
    console.write_line("");
    console.write_line(SETUP_HEADER);
    console.write_line(SETUP_SUBTITLE);
    console.write_line("1. Iniciar sesión");
    console.write_line("2. Salir");
}

/// Prints the login header, plus the error left by a failed attempt.
pub fn show_auth<C: Console + ?Sized>(console: &mut C, state: &ChatState) {
    console.write_line("");
    console.write_line(AUTH_HEADER);
    if let Some(error) = state.error() {
        console.write_line(&error.red().to_string());
    }
}

/// Prints the transcript followed by the chat menu.
pub fn show_chat<C: Console + ?Sized>(console: &mut C, state: &ChatState) {
    console.write_line("");
    console.write_line(CHAT_HEADER);
    if let Some(session) = state.session() {
        console.write_line(&format!("Usuario: {}", session.display_name));
    }

    for message in state.messages() {
        console.write_line(&message.to_string());
    }

    console.write_line("");
    console.write_line("1. Enviar mensaje");
    console.write_line("2. Cerrar sesión");
}

pub fn show_invalid_option<C: Console + ?Sized>(console: &mut C) {
    console.write_line(&INVALID_OPTION.yellow().to_string());
}

pub fn show_signing_in<C: Console + ?Sized>(console: &mut C) {
    console.write_line(&SIGNING_IN.bright_black().to_string());
}

pub fn show_farewell<C: Console + ?Sized>(console: &mut C) {
    console.write_line(FAREWELL);
}
