//! UTF-8 바이트 열에서 코드포인트 한 개를 읽는 디코더

/// `bytes[pos]`에서 시작하는 문자 하나를 디코딩한다.
/// 반환: (유니코드 스칼라 값, 소비한 바이트 수)
///
/// 비ASCII를 3바이트 고정 폭으로 가정하면 2바이트(é 등)와 4바이트(이모지 등)
/// 문자가 깨지므로, 표준 UTF-8 1/2/3/4바이트 패턴을 모두 읽는다.
/// 음절 범위 검사는 호출자 몫이다.
///
/// 잘못된 바이트 열이라도 에러 없이 리드 바이트 하나를 소비하고 넘어간다.
/// (`&str`에서 온 입력이라면 이 경로는 실행되지 않는다.)
pub fn decode_scalar(bytes: &[u8], pos: usize) -> (u32, usize) {
    let b0 = bytes[pos];
    if b0 & 0x80 == 0 {
        return (b0 as u32, 1);
    }

    // 리드 바이트로 길이 판정: 110xxxxx=2, 1110xxxx=3, 11110xxx=4
    let (len, lead) = if b0 & 0xE0 == 0xC0 {
        (2, (b0 & 0x1F) as u32)
    } else if b0 & 0xF0 == 0xE0 {
        (3, (b0 & 0x0F) as u32)
    } else if b0 & 0xF8 == 0xF0 {
        (4, (b0 & 0x07) as u32)
    } else {
        return (b0 as u32, 1);
    };

    if pos + len > bytes.len() {
        return (b0 as u32, 1);
    }

    let mut value = lead;
    for &b in &bytes[pos + 1..pos + len] {
        if b & 0xC0 != 0x80 {
            return (b0 as u32, 1);
        }
        value = (value << 6) | (b & 0x3F) as u32;
    }
    (value, len)
}
