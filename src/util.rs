// Small helpers shared across the screen.

use wasm_bindgen::JsValue;
use web_sys::console;

/// Base58 alphabet used for fabricated wallet addresses.
const WALLET_ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
/// Fabricated wallets are this long, like a Solana pubkey.
pub const WALLET_LEN: usize = 44;

pub fn format_secs(secs: u32) -> String {
    format!("{}s", secs)
}

/// Leaderboard display form: an ellipsis plus the last 12 characters.
pub fn short_wallet(wallet: &str) -> String {
    let start = wallet.len().saturating_sub(12);
    format!("...{}", &wallet[start..])
}

/// 44 random base58 characters; looks like a wallet, means nothing.
pub fn wallet_address() -> String {
    let mut out = String::with_capacity(WALLET_LEN);
    for _ in 0..WALLET_LEN {
        let i = (js_sys::Math::random() * WALLET_ALPHABET.len() as f64).floor() as usize;
        out.push(WALLET_ALPHABET[i] as char);
    }
    out
}

pub fn clog(msg: &str) {
    console::log_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_secs_renders_plain_seconds() {
        assert_eq!(format_secs(30), "30s");
        assert_eq!(format_secs(0), "0s");
    }

    #[test]
    fn short_wallet_keeps_the_tail() {
        let wallet = "5Kd3NBUAdUnhyzenEwVLy9pBKxSwXvE9FMPyR4UKZvpe";
        assert_eq!(short_wallet(wallet), "...FMPyR4UKZvpe");
    }

    #[test]
    fn short_wallet_tolerates_short_input() {
        assert_eq!(short_wallet("abc"), "...abc");
    }
}
