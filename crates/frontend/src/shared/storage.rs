//! Обёртки над `window.localStorage`.
//!
//! Ошибки доступа (приватный режим, запрет cookies) не считаются фатальными:
//! чтение возвращает `None`, запись логируется и пропускается.

use web_sys::{window, Storage};

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn read(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn write(key: &str, value: &str) {
    match local_storage() {
        Some(storage) => {
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage rejected write of `{}`", key);
            }
        }
        None => log::warn!("localStorage unavailable, `{}` not persisted", key),
    }
}
