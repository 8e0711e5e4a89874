//! Нарезка кода фиксированной ширины на поля.
//!
//! Выход за границы не считается ошибкой: `substr` возвращает пустую строку
//! или доступный хвост, а некорректность всплывает позже при разборе чисел.

/// Подстрока по символам (не по байтам) длиной до `length`, начиная с `start`.
pub fn substr(input: &str, start: usize, length: usize) -> String {
    let len = input.chars().count();
    if start >= len {
        return String::new();
    }
    let length = length.min(len - start);
    input.chars().skip(start).take(length).collect()
}

/// Оставляет только ASCII-цифры.
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}
