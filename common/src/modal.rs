//! 詳細モーダルのナビゲーション
//!
//! 状態は「閉」か「開（絞り込み結果上の位置i）」の2つ。
//! 範囲外の指定は黙って無視する。

/// モーダル状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Open(usize),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open(_))
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            Modal::Open(i) => Some(*i),
            Modal::Closed => None,
        }
    }

    /// 位置 `index` を開く。`len` 以上なら遷移しない
    pub fn open(&mut self, index: usize, len: usize) -> bool {
        if index >= len {
            return false;
        }
        *self = Modal::Open(index);
        true
    }

    pub fn close(&mut self) {
        *self = Modal::Closed;
    }

    pub fn can_prev(&self) -> bool {
        matches!(self, Modal::Open(i) if *i > 0)
    }

    pub fn can_next(&self, len: usize) -> bool {
        matches!(self, Modal::Open(i) if i + 1 < len)
    }

    /// 前へ。先頭では何もしない
    pub fn prev(&mut self) -> bool {
        match *self {
            Modal::Open(i) if i > 0 => {
                *self = Modal::Open(i - 1);
                true
            }
            _ => false,
        }
    }

    /// 次へ。末尾では何もしない
    pub fn next(&mut self, len: usize) -> bool {
        match *self {
            Modal::Open(i) if i + 1 < len => {
                *self = Modal::Open(i + 1);
                true
            }
            _ => false,
        }
    }
}

/// モーダルへのキー入力
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl ModalKey {
    /// KeyboardEvent.key の値から変換
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(ModalKey::Escape),
            "ArrowLeft" => Some(ModalKey::ArrowLeft),
            "ArrowRight" => Some(ModalKey::ArrowRight),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_range() {
        let mut modal = Modal::default();
        assert!(modal.open(2, 5));
        assert_eq!(modal, Modal::Open(2));
    }

    #[test]
    fn test_open_out_of_range_is_silent() {
        let mut modal = Modal::default();
        assert!(!modal.open(5, 5));
        assert_eq!(modal, Modal::Closed);
        assert!(!modal.open(0, 0));
        assert_eq!(modal, Modal::Closed);
    }

    #[test]
    fn test_first_index_disables_prev() {
        let mut modal = Modal::default();
        modal.open(0, 3);
        assert!(!modal.can_prev());
        assert!(modal.can_next(3));
        assert!(!modal.prev());
        assert_eq!(modal, Modal::Open(0));
    }

    #[test]
    fn test_last_index_disables_next() {
        let mut modal = Modal::default();
        modal.open(2, 3);
        assert!(modal.can_prev());
        assert!(!modal.can_next(3));
        assert!(!modal.next(3));
        assert_eq!(modal, Modal::Open(2));
    }

    #[test]
    fn test_traversal_stays_in_bounds() {
        let len = 4;
        let mut modal = Modal::default();
        modal.open(1, len);
        for _ in 0..10 {
            modal.next(len);
        }
        assert_eq!(modal.index(), Some(len - 1));
        for _ in 0..10 {
            modal.prev();
        }
        assert_eq!(modal.index(), Some(0));
    }

    #[test]
    fn test_close() {
        let mut modal = Modal::Open(1);
        modal.close();
        assert!(!modal.is_open());
        assert!(!modal.can_prev());
        assert!(!modal.next(10));
    }

    #[test]
    fn test_modal_key() {
        assert_eq!(ModalKey::from_key("Escape"), Some(ModalKey::Escape));
        assert_eq!(ModalKey::from_key("ArrowRight"), Some(ModalKey::ArrowRight));
        assert_eq!(ModalKey::from_key("Enter"), None);
    }
}
