//! Future era: actions and sports, emotions, travel and space.

use crate::era::EraId;
use crate::planet::Planet;
use crate::zone::{Sentence, Word, Zone};

#[rustfmt::skip]
pub(super) fn action() -> Planet {
    Planet::new("action", "Action Planet", "Hành tinh Hành động", "🏃", 0xFFF472B6, EraId::Future)
        .required_stars(200)
        .zone(
            Zone::new("daily_action", "Daily Actions", "Hành động hàng ngày", "🌅")
                .words([
                    Word::new("wake up", "thức dậy", "⏰", "I wake up early.", "Tôi thức dậy sớm."),
                    Word::new("eat", "ăn", "🍽️", "I eat breakfast.", "Tôi ăn sáng."),
                    Word::new("drink", "uống", "🥤", "I drink water.", "Tôi uống nước."),
                    Word::new("brush", "đánh răng", "🪥", "I brush my teeth.", "Tôi đánh răng."),
                    Word::new("wash", "rửa", "🧼", "I wash my hands.", "Tôi rửa tay."),
                    Word::new("dress", "mặc đồ", "👔", "I get dressed.", "Tôi mặc đồ."),
                    Word::new("study", "học", "📖", "I study hard.", "Tôi học chăm."),
                    Word::new("play", "chơi", "🎮", "I play games.", "Tôi chơi game."),
                ])
                .sentences([
                    Sentence::new("I wake up at 7.", "Tôi thức dậy lúc 7 giờ.", &["wake up"]),
                    Sentence::new("I go to bed at 9.", "Tôi đi ngủ lúc 9 giờ.", &["go", "bed"]),
                    Sentence::new("I study every day.", "Tôi học mỗi ngày.", &["study", "every day"]),
                ]),
        )
        .zone(Zone::new("sport", "Sports", "Thể thao", "⚽").words([
            Word::new("soccer", "bóng đá", "⚽", "I play soccer.", "Tôi chơi bóng đá."),
            Word::new("basketball", "bóng rổ", "🏀", "Basketball is fun.", "Bóng rổ vui."),
            Word::new("swimming", "bơi lội", "🏊", "I like swimming.", "Tôi thích bơi."),
            Word::new("running", "chạy bộ", "🏃", "Running is good.", "Chạy bộ tốt."),
            Word::new("cycling", "đạp xe", "🚴", "I go cycling.", "Tôi đi đạp xe."),
            Word::new("tennis", "quần vợt", "🎾", "Tennis is exciting.", "Quần vợt hấp dẫn."),
        ]))
}

#[rustfmt::skip]
pub(super) fn emotion() -> Planet {
    Planet::new("emotion", "Emotion Planet", "Hành tinh Cảm xúc", "😊", 0xFFFCD34D, EraId::Future)
        .required_stars(250)
        .zone(
            Zone::new("feeling", "Feelings", "Cảm xúc", "💭")
                .words([
                    Word::new("happy", "vui", "😊", "I am happy.", "Tôi vui."),
                    Word::new("sad", "buồn", "😢", "I feel sad.", "Tôi buồn."),
                    Word::new("angry", "giận", "😠", "Don't be angry.", "Đừng giận."),
                    Word::new("scared", "sợ", "😨", "I am scared.", "Tôi sợ."),
                    Word::new("excited", "hào hứng", "🤩", "I am excited.", "Tôi hào hứng."),
                    Word::new("tired", "mệt", "😴", "I am tired.", "Tôi mệt."),
                    Word::new("hungry", "đói", "🍽️", "I am hungry.", "Tôi đói."),
                    Word::new("thirsty", "khát", "💧", "I am thirsty.", "Tôi khát."),
                ])
                .sentences([
                    Sentence::new("How are you?", "Bạn khỏe không?", &["How", "are"]),
                    Sentence::new("I am fine.", "Tôi khỏe.", &["fine"]),
                    Sentence::new("Are you happy?", "Bạn vui không?", &["happy"]),
                ]),
        )
        .zone(Zone::new("describe", "Descriptions", "Mô tả", "📝").words([
            Word::new("big", "to", "🐘", "The elephant is big.", "Con voi to."),
            Word::new("small", "nhỏ", "🐜", "The ant is small.", "Con kiến nhỏ."),
            Word::new("tall", "cao", "🦒", "The giraffe is tall.", "Hươu cao cổ cao."),
            Word::new("short", "thấp", "🐕", "The dog is short.", "Con chó thấp."),
            Word::new("fast", "nhanh", "🐆", "The cheetah is fast.", "Báo nhanh."),
            Word::new("slow", "chậm", "🐢", "The turtle is slow.", "Rùa chậm."),
            Word::new("beautiful", "đẹp", "🌸", "The flower is beautiful.", "Bông hoa đẹp."),
            Word::new("cute", "dễ thương", "🐱", "The kitten is cute.", "Mèo con dễ thương."),
        ]))
}

#[rustfmt::skip]
pub(super) fn travel() -> Planet {
    Planet::new("travel", "Travel Planet", "Hành tinh Du lịch", "✈️", 0xFF38BDF8, EraId::Future)
        .required_stars(300)
        .zone(
            Zone::new("vehicle", "Vehicles", "Phương tiện", "🚗")
                .words([
                    Word::new("car", "xe hơi", "🚗", "I go by car.", "Tôi đi bằng xe hơi."),
                    Word::new("bus", "xe buýt", "🚌", "I take the bus.", "Tôi đi xe buýt."),
                    Word::new("train", "tàu hỏa", "🚂", "The train is fast.", "Tàu hỏa nhanh."),
                    Word::new("plane", "máy bay", "✈️", "The plane flies.", "Máy bay bay."),
                    Word::new("ship", "tàu thuyền", "🚢", "The ship sails.", "Tàu thuyền đi."),
                    Word::new("bicycle", "xe đạp", "🚲", "I ride a bicycle.", "Tôi đạp xe."),
                    Word::new("rocket", "tên lửa", "🚀", "The rocket goes to space.", "Tên lửa đi vào vũ trụ."),
                    Word::new("helicopter", "trực thăng", "🚁", "The helicopter hovers.", "Trực thăng bay lơ lửng."),
                ])
                .sentences([
                    Sentence::new("I want to travel.", "Tôi muốn đi du lịch.", &["want", "travel"]),
                    Sentence::new("I go by plane.", "Tôi đi bằng máy bay.", &["go", "plane"]),
                    Sentence::new("Let's explore!", "Hãy khám phá nào!", &["explore"]),
                ]),
        )
        .zone(Zone::new("place", "Places", "Địa điểm", "🗺️").words([
            Word::new("city", "thành phố", "🌆", "The city is busy.", "Thành phố nhộn nhịp."),
            Word::new("beach", "bãi biển", "🏖️", "I play at the beach.", "Tôi chơi ở biển."),
            Word::new("park", "công viên", "🏞️", "I run in the park.", "Tôi chạy trong công viên."),
            Word::new("zoo", "vườn thú", "🦁", "Animals live in the zoo.", "Động vật sống ở vườn thú."),
            Word::new("museum", "bảo tàng", "🏛️", "I visit the museum.", "Tôi thăm bảo tàng."),
            Word::new("library", "thư viện", "📚", "I read at the library.", "Tôi đọc ở thư viện."),
            Word::new("hospital", "bệnh viện", "🏥", "Doctors work at hospitals.", "Bác sĩ làm việc ở bệnh viện."),
            Word::new("restaurant", "nhà hàng", "🍽️", "We eat at restaurants.", "Chúng tôi ăn ở nhà hàng."),
        ]))
        .zone(Zone::new("space", "Space", "Không gian", "🚀").words([
            Word::new("space", "không gian", "🌌", "Space is dark.", "Không gian tối."),
            Word::new("planet", "hành tinh", "🪐", "Earth is a planet.", "Trái Đất là hành tinh."),
            Word::new("moon", "mặt trăng", "🌙", "The moon is bright.", "Mặt trăng sáng."),
            Word::new("Earth", "Trái Đất", "🌍", "I live on Earth.", "Tôi sống trên Trái Đất."),
            Word::new("Mars", "Sao Hỏa", "🔴", "Mars is red.", "Sao Hỏa màu đỏ."),
            Word::new("astronaut", "phi hành gia", "👨‍🚀", "Astronauts go to space.", "Phi hành gia đi vào vũ trụ."),
            Word::new("spaceship", "tàu vũ trụ", "🛸", "The spaceship flies.", "Tàu vũ trụ bay."),
        ]))
}
