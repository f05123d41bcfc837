//! S-AES key schedule and block encryption/decryption.

use crate::key::{RoundKeys, SaesKey};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, mix_columns, shift_rows, sub_nibbles,
};
use crate::sbox::{sub_word, INV_S_BOX, S_BOX};
use crate::state::{block_to_state, state_to_block};

/// Round constants XORed into the first word of each expanded key pair.
const RCON: [u8; 2] = [0x80, 0x30];

/// Swaps the two nibbles of a key-schedule word. A nibble swap, not a bit
/// rotation.
fn rot_word(word: u8) -> u8 {
    (word << 4) | (word >> 4)
}

/// Expands a 16-bit cipher key into the three round keys.
pub fn expand_key(key: SaesKey) -> RoundKeys {
    let [w0, w1] = key.0.to_be_bytes();
    let w2 = sub_word(rot_word(w1), &S_BOX) ^ RCON[0] ^ w0;
    let w3 = w2 ^ w1;
    let w4 = sub_word(rot_word(w3), &S_BOX) ^ RCON[1] ^ w2;
    let w5 = w4 ^ w3;

    RoundKeys([
        u16::from_be_bytes([w0, w1]),
        u16::from_be_bytes([w2, w3]),
        u16::from_be_bytes([w4, w5]),
    ])
}

/// Encrypts a single 16-bit block with pre-expanded round keys.
pub fn encrypt_block(block: u16, round_keys: &RoundKeys) -> u16 {
    let mut state = block_to_state(block);

    state = add_round_key(state, round_keys.get(0));

    state = sub_nibbles(state, &S_BOX);
    state = shift_rows(state);
    state = mix_columns(state);
    state = add_round_key(state, round_keys.get(1));

    // The final round has no MixColumns.
    state = sub_nibbles(state, &S_BOX);
    state = shift_rows(state);
    state = add_round_key(state, round_keys.get(2));

    state_to_block(state)
}

/// Decrypts a single 16-bit block with pre-expanded round keys.
pub fn decrypt_block(block: u16, round_keys: &RoundKeys) -> u16 {
    let mut state = block_to_state(block);

    state = add_round_key(state, round_keys.get(2));

    state = inv_shift_rows(state);
    state = sub_nibbles(state, &INV_S_BOX);
    state = add_round_key(state, round_keys.get(1));
    state = inv_mix_columns(state);

    state = inv_shift_rows(state);
    state = sub_nibbles(state, &INV_S_BOX);
    state = add_round_key(state, round_keys.get(0));

    state_to_block(state)
}

/// Encrypts one block, expanding the key internally.
pub fn encrypt(plaintext: u16, cipher_key: SaesKey) -> u16 {
    encrypt_block(plaintext, &expand_key(cipher_key))
}

/// Decrypts one block, expanding the key internally.
pub fn decrypt(ciphertext: u16, cipher_key: SaesKey) -> u16 {
    decrypt_block(ciphertext, &expand_key(cipher_key))
}
