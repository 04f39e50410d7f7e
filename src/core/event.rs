//! 按键事件：与宿主环境解耦的按键表示

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Home,
    End,
    Escape,
    Enter,
    Char(char),
}

/// 解析配置里的按键名（大小写不敏感）
pub fn parse_key(value: &str) -> Option<Key> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    let v_lc = v.to_ascii_lowercase();
    let key = match v_lc.as_str() {
        "left" | "arrowleft" => Key::Left,
        "right" | "arrowright" => Key::Right,
        "home" => Key::Home,
        "end" => Key::End,
        "esc" | "escape" => Key::Escape,
        "enter" => Key::Enter,
        "space" => Key::Char(' '),
        _ => {
            let mut chars = v.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Key::Char(ch)
        }
    };

    Some(key)
}
