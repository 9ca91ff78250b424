//! Prehistoric era: animals, colors, numbers and shapes.

use crate::era::EraId;
use crate::planet::Planet;
use crate::zone::{Sentence, Word, Zone};

#[rustfmt::skip]
pub(super) fn animal() -> Planet {
    Planet::new("animal", "Animal Planet", "Hành tinh Động vật", "🐾", 0xFF4ADE80, EraId::Prehistoric)
        .unlocked()
        .required_stars(0)
        .zone(
            Zone::new("farm", "Farm Animals", "Động vật nông trại", "🐄")
                .unlocked()
                .words([
                    Word::new("dog", "con chó", "🐕", "The dog is brown.", "Con chó màu nâu."),
                    Word::new("cat", "con mèo", "🐱", "The cat is sleeping.", "Con mèo đang ngủ."),
                    Word::new("cow", "con bò", "🐄", "The cow gives milk.", "Con bò cho sữa."),
                    Word::new("pig", "con heo", "🐷", "The pig is pink.", "Con heo màu hồng."),
                    Word::new("chicken", "con gà", "🐔", "The chicken lays eggs.", "Con gà đẻ trứng."),
                    Word::new("duck", "con vịt", "🦆", "The duck can swim.", "Con vịt biết bơi."),
                    Word::new("horse", "con ngựa", "🐴", "The horse runs fast.", "Con ngựa chạy nhanh."),
                    Word::new("sheep", "con cừu", "🐑", "The sheep has wool.", "Con cừu có lông."),
                ])
                .sentences([
                    Sentence::new("This is a dog.", "Đây là con chó.", &["dog"]),
                    Sentence::new("I see a cat.", "Tôi thấy con mèo.", &["cat"]),
                    Sentence::new("The cow is big.", "Con bò to lớn.", &["cow", "big"]),
                ]),
        )
        .zone(
            Zone::new("wild", "Wild Animals", "Động vật hoang dã", "🦁")
                .words([
                    Word::new("lion", "sư tử", "🦁", "The lion is the king.", "Sư tử là vua."),
                    Word::new("tiger", "con hổ", "🐅", "The tiger has stripes.", "Con hổ có sọc."),
                    Word::new("elephant", "con voi", "🐘", "The elephant is big.", "Con voi rất to."),
                    Word::new("monkey", "con khỉ", "🐒", "The monkey likes bananas.", "Con khỉ thích chuối."),
                    Word::new("bear", "con gấu", "🐻", "The bear is strong.", "Con gấu rất khỏe."),
                    Word::new("snake", "con rắn", "🐍", "The snake is long.", "Con rắn dài."),
                    Word::new("crocodile", "cá sấu", "🐊", "The crocodile has teeth.", "Cá sấu có răng."),
                    Word::new("giraffe", "hươu cao cổ", "🦒", "The giraffe is tall.", "Hươu cao cổ rất cao."),
                ])
                .sentences([
                    Sentence::new("This is a lion.", "Đây là sư tử.", &["lion"]),
                    Sentence::new("It is big.", "Nó to lớn.", &["big"]),
                    Sentence::new("The elephant has a trunk.", "Con voi có vòi.", &["elephant", "trunk"]),
                ]),
        )
        .zone(Zone::new("sea", "Sea Animals", "Động vật biển", "🐠").words([
            Word::new("fish", "con cá", "🐟", "The fish can swim.", "Con cá biết bơi."),
            Word::new("shark", "cá mập", "🦈", "The shark is scary.", "Cá mập đáng sợ."),
            Word::new("whale", "cá voi", "🐋", "The whale is huge.", "Cá voi rất lớn."),
            Word::new("dolphin", "cá heo", "🐬", "The dolphin is smart.", "Cá heo thông minh."),
            Word::new("octopus", "bạch tuộc", "🐙", "The octopus has eight arms.", "Bạch tuộc có tám tay."),
            Word::new("crab", "con cua", "🦀", "The crab walks sideways.", "Con cua đi ngang."),
            Word::new("turtle", "con rùa", "🐢", "The turtle is slow.", "Con rùa chậm chạp."),
            Word::new("starfish", "sao biển", "⭐", "The starfish has five arms.", "Sao biển có năm cánh."),
        ]))
        .zone(Zone::new("bird", "Birds", "Các loài chim", "🦅").words([
            Word::new("bird", "con chim", "🐦", "The bird can fly.", "Con chim biết bay."),
            Word::new("eagle", "đại bàng", "🦅", "The eagle flies high.", "Đại bàng bay cao."),
            Word::new("owl", "con cú", "🦉", "The owl sleeps by day.", "Con cú ngủ ban ngày."),
            Word::new("parrot", "con vẹt", "🦜", "The parrot can talk.", "Con vẹt biết nói."),
            Word::new("penguin", "chim cánh cụt", "🐧", "The penguin lives in ice.", "Chim cánh cụt sống ở băng."),
            Word::new("peacock", "con công", "🦚", "The peacock is beautiful.", "Con công rất đẹp."),
        ]))
        .zone(Zone::new("insect", "Insects", "Côn trùng", "🦋").words([
            Word::new("butterfly", "con bướm", "🦋", "The butterfly is pretty.", "Con bướm rất đẹp."),
            Word::new("bee", "con ong", "🐝", "The bee makes honey.", "Con ong làm mật."),
            Word::new("ant", "con kiến", "🐜", "The ant is small.", "Con kiến nhỏ."),
            Word::new("spider", "con nhện", "🕷️", "The spider has eight legs.", "Con nhện có tám chân."),
            Word::new("ladybug", "bọ rùa", "🐞", "The ladybug is red.", "Bọ rùa màu đỏ."),
            Word::new("dragonfly", "chuồn chuồn", "🪰", "The dragonfly flies fast.", "Chuồn chuồn bay nhanh."),
        ]))
        // Special zone
        .zone(Zone::new("dino", "Dinosaurs", "Khủng long", "🦕").words([
            Word::new("dinosaur", "khủng long", "🦕", "Dinosaurs lived long ago.", "Khủng long sống cách đây lâu."),
            Word::new("T-Rex", "khủng long bạo chúa", "🦖", "T-Rex was scary.", "T-Rex đáng sợ."),
            Word::new("egg", "quả trứng", "🥚", "Dinosaurs laid eggs.", "Khủng long đẻ trứng."),
            Word::new("bone", "xương", "🦴", "We find dinosaur bones.", "Chúng ta tìm thấy xương khủng long."),
            Word::new("fossil", "hóa thạch", "🪨", "Fossils are very old.", "Hóa thạch rất cổ."),
        ]))
}

#[rustfmt::skip]
pub(super) fn color() -> Planet {
    Planet::new("color", "Color Planet", "Hành tinh Màu sắc", "🌈", 0xFFF472B6, EraId::Prehistoric)
        .unlocked()
        .required_stars(0)
        .zone(
            Zone::new("basic_color", "Basic Colors", "Màu cơ bản", "🎨")
                .unlocked()
                .words([
                    Word::new("red", "màu đỏ", "🔴", "The apple is red.", "Quả táo màu đỏ."),
                    Word::new("blue", "màu xanh dương", "🔵", "The sky is blue.", "Bầu trời màu xanh."),
                    Word::new("yellow", "màu vàng", "🟡", "The sun is yellow.", "Mặt trời màu vàng."),
                    Word::new("green", "màu xanh lá", "🟢", "Grass is green.", "Cỏ màu xanh lá."),
                    Word::new("orange", "màu cam", "🟠", "The orange is orange.", "Quả cam màu cam."),
                    Word::new("purple", "màu tím", "🟣", "Grapes are purple.", "Nho màu tím."),
                    Word::new("pink", "màu hồng", "💗", "The flower is pink.", "Bông hoa màu hồng."),
                    Word::new("black", "màu đen", "⬛", "Night is black.", "Đêm màu đen."),
                    Word::new("white", "màu trắng", "⬜", "Snow is white.", "Tuyết màu trắng."),
                    Word::new("brown", "màu nâu", "🟤", "The tree is brown.", "Cây màu nâu."),
                ])
                .sentences([
                    Sentence::new("What color is it?", "Nó màu gì?", &["color"]),
                    Sentence::new("It is red.", "Nó màu đỏ.", &["red"]),
                    Sentence::new("I like blue.", "Tôi thích màu xanh.", &["like", "blue"]),
                ]),
        )
        .zone(Zone::new("rainbow", "Rainbow", "Cầu vồng", "🌈").words([
            Word::new("rainbow", "cầu vồng", "🌈", "The rainbow has seven colors.", "Cầu vồng có bảy màu."),
            Word::new("violet", "màu tím violet", "💜", "Violet is in the rainbow.", "Màu tím có trong cầu vồng."),
            Word::new("indigo", "màu chàm", "💙", "Indigo is dark blue.", "Màu chàm là xanh đậm."),
        ]))
        .zone(Zone::new("mix_color", "Color Mixing", "Pha màu", "🎭").words([
            Word::new("light", "nhạt", "☀️", "Light blue is pretty.", "Xanh nhạt rất đẹp."),
            Word::new("dark", "đậm", "🌙", "Dark red is nice.", "Đỏ đậm rất đẹp."),
            Word::new("bright", "sáng", "✨", "Yellow is bright.", "Màu vàng sáng."),
            Word::new("colorful", "nhiều màu", "🎨", "The picture is colorful.", "Bức tranh nhiều màu."),
        ]))
}

#[rustfmt::skip]
pub(super) fn number() -> Planet {
    Planet::new("number", "Number Planet", "Hành tinh Số", "🔢", 0xFF60A5FA, EraId::Prehistoric)
        .required_stars(10)
        .zone(
            Zone::new("num_1_10", "Numbers 1-10", "Số 1-10", "1️⃣")
                .unlocked()
                .words([
                    Word::new("one", "một", "1️⃣", "I have one apple.", "Tôi có một quả táo."),
                    Word::new("two", "hai", "2️⃣", "I have two hands.", "Tôi có hai tay."),
                    Word::new("three", "ba", "3️⃣", "There are three cats.", "Có ba con mèo."),
                    Word::new("four", "bốn", "4️⃣", "A dog has four legs.", "Chó có bốn chân."),
                    Word::new("five", "năm", "5️⃣", "I have five fingers.", "Tôi có năm ngón tay."),
                    Word::new("six", "sáu", "6️⃣", "There are six eggs.", "Có sáu quả trứng."),
                    Word::new("seven", "bảy", "7️⃣", "Seven days in a week.", "Bảy ngày trong tuần."),
                    Word::new("eight", "tám", "8️⃣", "Octopus has eight arms.", "Bạch tuộc có tám tay."),
                    Word::new("nine", "chín", "9️⃣", "Nine is before ten.", "Chín đứng trước mười."),
                    Word::new("ten", "mười", "🔟", "I count to ten.", "Tôi đếm đến mười."),
                ]),
        )
        .zone(Zone::new("num_11_20", "Numbers 11-20", "Số 11-20", "🔢").words([
            Word::new("eleven", "mười một", "1️⃣1️⃣", "Eleven plus one is twelve.", "Mười một cộng một là mười hai."),
            Word::new("twelve", "mười hai", "1️⃣2️⃣", "There are twelve months.", "Có mười hai tháng."),
            Word::new("thirteen", "mười ba", "1️⃣3️⃣", "Thirteen is a number.", "Mười ba là một số."),
            Word::new("fourteen", "mười bốn", "1️⃣4️⃣", "Fourteen days is two weeks.", "Mười bốn ngày là hai tuần."),
            Word::new("fifteen", "mười lăm", "1️⃣5️⃣", "Fifteen minutes.", "Mười lăm phút."),
            Word::new("twenty", "hai mươi", "2️⃣0️⃣", "I can count to twenty.", "Tôi đếm được đến hai mươi."),
        ]))
        .zone(Zone::new("shape", "Shapes", "Hình dạng", "🔷").words([
            Word::new("circle", "hình tròn", "⭕", "The sun is a circle.", "Mặt trời hình tròn."),
            Word::new("square", "hình vuông", "⬜", "The box is square.", "Hộp hình vuông."),
            Word::new("triangle", "hình tam giác", "🔺", "A triangle has three sides.", "Tam giác có ba cạnh."),
            Word::new("rectangle", "hình chữ nhật", "🟦", "The door is a rectangle.", "Cửa hình chữ nhật."),
            Word::new("star", "ngôi sao", "⭐", "I see a star.", "Tôi thấy ngôi sao."),
            Word::new("heart", "trái tim", "❤️", "Love is a heart.", "Tình yêu là trái tim."),
        ]))
}
