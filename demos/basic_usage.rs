//! Basic usage example for ubuf
//!
//! Run with: cargo run --example basic_usage

use ubuf::messages::*;
use ubuf::*;

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("ubuf Basic Usage Example");
    println!("========================");

    // Example 1: Encode and decode a known message type
    println!("\n1. Server Update Message:");
    {
        let msg = ServerUpdateMsg {
            user_id: "u1".into(),
            name: "Ann".into(),
            pos: Pos { x: 1.5, y: -2.25 },
        };
        let bytes = serialize(&msg);
        println!("  Encoded {} bytes: {}", bytes.len(), hex(&bytes));

        // Decoding never reads the tag; strip it first
        let (tag, body) = split_tag(&bytes).ok_or("empty buffer")?;
        let decoded: ServerUpdateMsg = decode_body(body)?;
        println!(
            "  Decoded: tag={}, user_id={}, name={}, pos=({}, {})",
            tag, decoded.user_id, decoded.name, decoded.pos.x, decoded.pos.y
        );
    }

    // Example 2: Dispatch on the tag byte
    println!("\n2. Dispatch by Tag:");
    {
        let outgoing: Vec<AnyMessage> = vec![
            ClientRegisterMsg {
                name: "Bob".into(),
            }
            .into(),
            ServerRegisterMsg {}.into(),
            ClientUpdateMsg {
                pos: Pos { x: 3.0, y: 4.0 },
            }
            .into(),
            ServerDeleteMsg {
                user_id: "u1".into(),
            }
            .into(),
        ];

        for msg in &outgoing {
            let bytes = msg.to_bytes();
            let received = AnyMessage::from_bytes(&bytes)?;
            println!("  [{}] {:?}", hex(&bytes), received);
        }
    }

    // Example 3: Length prefixes are most-significant-digit first
    println!("\n3. Varint Length Prefixes:");
    {
        for value in [0u64, 127, 128, 300, 16_384] {
            let mut buf = [0u8; MAX_VARINT_LEN];
            let len = varint::encode(value, &mut buf);
            println!("  {:>6} -> {}", value, hex(&buf[..len]));
        }
    }

    // Example 4: Error handling
    println!("\n4. Error Handling:");
    {
        let bytes = ServerUpdateMsg::default().to_bytes();
        let truncated = &bytes[1..bytes.len() - 1];
        match decode_body::<ServerUpdateMsg>(truncated) {
            Ok(_) => println!("  Unexpected success"),
            Err(e) => println!("  Truncated body rejected: {}", e),
        }

        match AnyMessage::from_bytes(&[0xEE]) {
            Ok(_) => println!("  Unexpected success"),
            Err(e) => println!("  Unknown tag rejected: {}", e),
        }
    }

    // Example 5: Hand-written body with the raw writer
    println!("\n5. Manual Construction:");
    {
        let mut writer = Writer::with_capacity(4);
        writer.write_scalar(ClientRegisterMsg::TAG);
        writer.write_str("manual");
        println!(
            "  Wrote {} bytes, capacity grew to {}",
            writer.len(),
            writer.capacity()
        );

        let any = AnyMessage::from_bytes(writer.as_slice())?;
        println!("  Decoded: {:?}", any);
    }

    println!("\nAll examples completed successfully!");
    Ok(())
}
