//! Demonstrates expanding a key and round-tripping two blocks.

use saes::{decrypt_block, encrypt_block, expand_key, SaesKey};

fn main() {
    let key = SaesKey(0xA73B);
    let round_keys = expand_key(key);

    for plaintext in [0x6F6Bu16, 0x1234] {
        let ciphertext = encrypt_block(plaintext, &round_keys);
        let recovered = decrypt_block(ciphertext, &round_keys);
        assert_eq!(recovered, plaintext);
        println!("plaintext {plaintext:#06x} -> ciphertext {ciphertext:#06x}");
    }

    println!("example succeeded; both blocks round-trip");
}
