//! Modern era: school, nature and weather, the home.

use crate::era::EraId;
use crate::planet::Planet;
use crate::zone::{Sentence, Word, Zone};

#[rustfmt::skip]
pub(super) fn school() -> Planet {
    Planet::new("school", "School Planet", "Hành tinh Trường học", "📚", 0xFFFBBF24, EraId::Modern)
        .required_stars(100)
        .zone(
            Zone::new("classroom", "Classroom", "Lớp học", "🏫")
                .words([
                    Word::new("school", "trường học", "🏫", "I go to school.", "Tôi đi học."),
                    Word::new("teacher", "giáo viên", "👨‍🏫", "The teacher teaches.", "Thầy giáo dạy học."),
                    Word::new("student", "học sinh", "👨‍🎓", "I am a student.", "Tôi là học sinh."),
                    Word::new("classroom", "lớp học", "🏫", "My classroom is big.", "Lớp học tôi to."),
                    Word::new("desk", "bàn", "🪑", "I sit at my desk.", "Tôi ngồi ở bàn."),
                    Word::new("chair", "ghế", "🪑", "The chair is blue.", "Ghế màu xanh."),
                    Word::new("board", "bảng", "📋", "Teacher writes on the board.", "Thầy viết lên bảng."),
                ])
                .sentences([
                    Sentence::new("I go to school.", "Tôi đi học.", &["go", "school"]),
                    Sentence::new("I study English.", "Tôi học Tiếng Anh.", &["study", "English"]),
                    Sentence::new("School is fun.", "Trường học vui.", &["school", "fun"]),
                ]),
        )
        .zone(Zone::new("supply", "School Supplies", "Đồ dùng học tập", "✏️").words([
            Word::new("book", "sách", "📚", "I read a book.", "Tôi đọc sách."),
            Word::new("pencil", "bút chì", "✏️", "I write with a pencil.", "Tôi viết bằng bút chì."),
            Word::new("pen", "bút mực", "🖊️", "The pen is blue.", "Bút mực màu xanh."),
            Word::new("eraser", "tẩy", "🧽", "I use an eraser.", "Tôi dùng tẩy."),
            Word::new("ruler", "thước kẻ", "📏", "I measure with a ruler.", "Tôi đo bằng thước."),
            Word::new("bag", "cặp sách", "🎒", "My bag is heavy.", "Cặp sách tôi nặng."),
            Word::new("notebook", "vở", "📓", "I write in my notebook.", "Tôi viết vào vở."),
        ]))
        .zone(Zone::new("subject", "Subjects", "Môn học", "📖").words([
            Word::new("English", "Tiếng Anh", "🇬🇧", "I learn English.", "Tôi học Tiếng Anh."),
            Word::new("Math", "Toán", "🔢", "Math is interesting.", "Toán thú vị."),
            Word::new("Science", "Khoa học", "🔬", "I like Science.", "Tôi thích Khoa học."),
            Word::new("Art", "Mỹ thuật", "🎨", "Art is creative.", "Mỹ thuật sáng tạo."),
            Word::new("Music", "Âm nhạc", "🎵", "I love Music.", "Tôi yêu Âm nhạc."),
            Word::new("PE", "Thể dục", "⚽", "PE is fun.", "Thể dục vui."),
        ]))
}

#[rustfmt::skip]
pub(super) fn nature() -> Planet {
    Planet::new("nature", "Nature Planet", "Hành tinh Thiên nhiên", "🌳", 0xFF34D399, EraId::Modern)
        .required_stars(130)
        .zone(
            Zone::new("weather", "Weather", "Thời tiết", "🌤️")
                .words([
                    Word::new("sun", "mặt trời", "☀️", "The sun is bright.", "Mặt trời sáng."),
                    Word::new("rain", "mưa", "🌧️", "It is raining.", "Trời đang mưa."),
                    Word::new("cloud", "mây", "☁️", "The clouds are white.", "Mây trắng."),
                    Word::new("wind", "gió", "💨", "The wind is strong.", "Gió mạnh."),
                    Word::new("snow", "tuyết", "❄️", "Snow is cold.", "Tuyết lạnh."),
                    Word::new("rainbow", "cầu vồng", "🌈", "I see a rainbow.", "Tôi thấy cầu vồng."),
                    Word::new("hot", "nóng", "🔥", "Today is hot.", "Hôm nay nóng."),
                    Word::new("cold", "lạnh", "🥶", "Winter is cold.", "Mùa đông lạnh."),
                ])
                .sentences([
                    Sentence::new("How is the weather?", "Thời tiết thế nào?", &["weather"]),
                    Sentence::new("It is sunny today.", "Hôm nay trời nắng.", &["sunny", "today"]),
                    Sentence::new("I like rainy days.", "Tôi thích ngày mưa.", &["rainy", "days"]),
                ]),
        )
        .zone(Zone::new("season", "Seasons", "Mùa", "🍂").words([
            Word::new("spring", "mùa xuân", "🌸", "Spring has flowers.", "Mùa xuân có hoa."),
            Word::new("summer", "mùa hè", "☀️", "Summer is hot.", "Mùa hè nóng."),
            Word::new("autumn", "mùa thu", "🍂", "Leaves fall in autumn.", "Lá rụng mùa thu."),
            Word::new("winter", "mùa đông", "❄️", "Winter is cold.", "Mùa đông lạnh."),
        ]))
        .zone(Zone::new("nature_obj", "Nature Objects", "Vật thiên nhiên", "🌲").words([
            Word::new("tree", "cây", "🌳", "The tree is tall.", "Cây cao."),
            Word::new("flower", "hoa", "🌸", "The flower is pretty.", "Hoa đẹp."),
            Word::new("grass", "cỏ", "🌿", "Grass is green.", "Cỏ xanh."),
            Word::new("mountain", "núi", "🏔️", "The mountain is high.", "Núi cao."),
            Word::new("river", "sông", "🏞️", "Fish live in rivers.", "Cá sống trong sông."),
            Word::new("ocean", "đại dương", "🌊", "The ocean is big.", "Đại dương rộng lớn."),
            Word::new("sky", "bầu trời", "🌌", "The sky is blue.", "Bầu trời xanh."),
            Word::new("star", "ngôi sao", "⭐", "Stars shine at night.", "Sao sáng ban đêm."),
        ]))
}

#[rustfmt::skip]
pub(super) fn home() -> Planet {
    Planet::new("home", "Home Planet", "Hành tinh Ngôi nhà", "🏠", 0xFF818CF8, EraId::Modern)
        .required_stars(160)
        .zone(Zone::new("room", "Rooms", "Phòng trong nhà", "🚪").words([
            Word::new("house", "nhà", "🏠", "I live in a house.", "Tôi sống trong nhà."),
            Word::new("bedroom", "phòng ngủ", "🛏️", "I sleep in my bedroom.", "Tôi ngủ trong phòng ngủ."),
            Word::new("kitchen", "nhà bếp", "🍳", "Mom cooks in the kitchen.", "Mẹ nấu ăn trong bếp."),
            Word::new("bathroom", "phòng tắm", "🚿", "I wash in the bathroom.", "Tôi tắm trong phòng tắm."),
            Word::new(
                "living room",
                "phòng khách",
                "🛋️",
                "We watch TV in the living room.",
                "Chúng tôi xem TV trong phòng khách.",
            ),
            Word::new("garden", "vườn", "🌻", "Flowers grow in the garden.", "Hoa mọc trong vườn."),
        ]))
        .zone(Zone::new("furniture", "Furniture", "Đồ nội thất", "🛋️").words([
            Word::new("bed", "giường", "🛏️", "I sleep on the bed.", "Tôi ngủ trên giường."),
            Word::new("table", "bàn", "🪑", "Food is on the table.", "Đồ ăn ở trên bàn."),
            Word::new("chair", "ghế", "🪑", "I sit on a chair.", "Tôi ngồi trên ghế."),
            Word::new("sofa", "ghế sofa", "🛋️", "The sofa is soft.", "Ghế sofa êm."),
            Word::new("lamp", "đèn", "💡", "The lamp gives light.", "Đèn cho ánh sáng."),
            Word::new("TV", "ti vi", "📺", "I watch TV.", "Tôi xem ti vi."),
            Word::new("clock", "đồng hồ", "🕐", "The clock shows time.", "Đồng hồ chỉ giờ."),
        ]))
}
