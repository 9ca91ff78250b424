//! Medieval era: food, family and jobs, the body.

use crate::era::EraId;
use crate::planet::Planet;
use crate::zone::{Sentence, Word, Zone};

#[rustfmt::skip]
pub(super) fn food() -> Planet {
    Planet::new("food", "Food Planet", "Hành tinh Đồ ăn", "🍎", 0xFFFB923C, EraId::Medieval)
        .required_stars(30)
        .zone(Zone::new("fruit", "Fruits", "Trái cây", "🍎").words([
            Word::new("apple", "táo", "🍎", "I eat an apple.", "Tôi ăn táo."),
            Word::new("banana", "chuối", "🍌", "Monkeys like bananas.", "Khỉ thích chuối."),
            Word::new("orange", "cam", "🍊", "Orange juice is good.", "Nước cam ngon."),
            Word::new("grape", "nho", "🍇", "Grapes are sweet.", "Nho ngọt."),
            Word::new("watermelon", "dưa hấu", "🍉", "Watermelon is red.", "Dưa hấu màu đỏ."),
            Word::new("strawberry", "dâu tây", "🍓", "I like strawberries.", "Tôi thích dâu tây."),
            Word::new("mango", "xoài", "🥭", "Mango is yellow.", "Xoài màu vàng."),
            Word::new("pineapple", "dứa", "🍍", "Pineapple is sweet.", "Dứa ngọt."),
        ]))
        .zone(Zone::new("vegetable", "Vegetables", "Rau củ", "🥕").words([
            Word::new("carrot", "cà rốt", "🥕", "Rabbits eat carrots.", "Thỏ ăn cà rốt."),
            Word::new("tomato", "cà chua", "🍅", "Tomato is red.", "Cà chua màu đỏ."),
            Word::new("potato", "khoai tây", "🥔", "I like potatoes.", "Tôi thích khoai tây."),
            Word::new("corn", "bắp", "🌽", "Corn is yellow.", "Bắp màu vàng."),
            Word::new("cucumber", "dưa leo", "🥒", "Cucumber is green.", "Dưa leo màu xanh."),
            Word::new("onion", "hành", "🧅", "Onion makes me cry.", "Hành làm tôi khóc."),
        ]))
        .zone(Zone::new("drink", "Drinks", "Đồ uống", "🥤").words([
            Word::new("water", "nước", "💧", "I drink water.", "Tôi uống nước."),
            Word::new("milk", "sữa", "🥛", "Milk is white.", "Sữa màu trắng."),
            Word::new("juice", "nước ép", "🧃", "I like orange juice.", "Tôi thích nước cam."),
            Word::new("tea", "trà", "🍵", "Tea is hot.", "Trà nóng."),
        ]))
        .zone(Zone::new("meal", "Meals", "Bữa ăn", "🍽️").words([
            Word::new("breakfast", "bữa sáng", "🍳", "I eat breakfast.", "Tôi ăn sáng."),
            Word::new("lunch", "bữa trưa", "🥪", "Lunch is at noon.", "Bữa trưa lúc trưa."),
            Word::new("dinner", "bữa tối", "🍝", "Dinner is at night.", "Bữa tối vào buổi tối."),
            Word::new("rice", "cơm", "🍚", "I eat rice.", "Tôi ăn cơm."),
            Word::new("bread", "bánh mì", "🍞", "Bread is yummy.", "Bánh mì ngon."),
            Word::new("egg", "trứng", "🥚", "I eat eggs.", "Tôi ăn trứng."),
        ]))
}

#[rustfmt::skip]
pub(super) fn family() -> Planet {
    Planet::new("family", "Family Planet", "Hành tinh Gia đình", "👨‍👩‍👧‍👦", 0xFFA78BFA, EraId::Medieval)
        .required_stars(50)
        .zone(
            Zone::new("family_member", "Family Members", "Thành viên gia đình", "👨‍👩‍👧")
                .words([
                    Word::new("mother", "mẹ", "👩", "My mother loves me.", "Mẹ yêu tôi."),
                    Word::new("father", "bố", "👨", "My father is strong.", "Bố tôi khỏe."),
                    Word::new("sister", "chị/em gái", "👧", "My sister is nice.", "Chị gái tôi tốt bụng."),
                    Word::new("brother", "anh/em trai", "👦", "My brother is tall.", "Anh trai tôi cao."),
                    Word::new("grandmother", "bà", "👵", "Grandma tells stories.", "Bà kể chuyện."),
                    Word::new("grandfather", "ông", "👴", "Grandpa is wise.", "Ông thông thái."),
                    Word::new("baby", "em bé", "👶", "The baby is cute.", "Em bé dễ thương."),
                    Word::new("family", "gia đình", "👨‍👩‍👧‍👦", "I love my family.", "Tôi yêu gia đình."),
                ])
                .sentences([
                    Sentence::new("This is my mother.", "Đây là mẹ tôi.", &["mother"]),
                    Sentence::new("I have a brother.", "Tôi có một anh trai.", &["brother"]),
                    Sentence::new("We are a family.", "Chúng tôi là một gia đình.", &["family"]),
                ]),
        )
        .zone(Zone::new("job", "Jobs", "Nghề nghiệp", "👨‍⚕️").words([
            Word::new("teacher", "giáo viên", "👨‍🏫", "My teacher is kind.", "Thầy giáo tôi tốt bụng."),
            Word::new("doctor", "bác sĩ", "👨‍⚕️", "The doctor helps people.", "Bác sĩ giúp mọi người."),
            Word::new("police", "cảnh sát", "👮", "Police keep us safe.", "Cảnh sát bảo vệ chúng ta."),
            Word::new("firefighter", "lính cứu hỏa", "👨‍🚒", "Firefighters are brave.", "Lính cứu hỏa dũng cảm."),
            Word::new("farmer", "nông dân", "👨‍🌾", "The farmer grows food.", "Nông dân trồng thức ăn."),
            Word::new("chef", "đầu bếp", "👨‍🍳", "The chef cooks food.", "Đầu bếp nấu ăn."),
            Word::new("pilot", "phi công", "👨‍✈️", "The pilot flies planes.", "Phi công lái máy bay."),
            Word::new("astronaut", "phi hành gia", "👨‍🚀", "I want to be an astronaut.", "Tôi muốn làm phi hành gia."),
        ]))
}

#[rustfmt::skip]
pub(super) fn body() -> Planet {
    Planet::new("body", "Body Planet", "Hành tinh Cơ thể", "🤸", 0xFFF87171, EraId::Medieval)
        .required_stars(70)
        .zone(Zone::new("face", "Face", "Khuôn mặt", "😊").words([
            Word::new("head", "đầu", "🗣️", "I nod my head.", "Tôi gật đầu."),
            Word::new("eye", "mắt", "👁️", "I have two eyes.", "Tôi có hai mắt."),
            Word::new("ear", "tai", "👂", "I hear with my ears.", "Tôi nghe bằng tai."),
            Word::new("nose", "mũi", "👃", "I smell with my nose.", "Tôi ngửi bằng mũi."),
            Word::new("mouth", "miệng", "👄", "I eat with my mouth.", "Tôi ăn bằng miệng."),
            Word::new("hair", "tóc", "💇", "My hair is black.", "Tóc tôi màu đen."),
            Word::new("teeth", "răng", "🦷", "I brush my teeth.", "Tôi đánh răng."),
        ]))
        .zone(Zone::new("body_part", "Body Parts", "Các bộ phận", "💪").words([
            Word::new("hand", "tay", "✋", "I wave my hand.", "Tôi vẫy tay."),
            Word::new("arm", "cánh tay", "💪", "I have two arms.", "Tôi có hai cánh tay."),
            Word::new("leg", "chân", "🦵", "I run with my legs.", "Tôi chạy bằng chân."),
            Word::new("foot", "bàn chân", "🦶", "I have two feet.", "Tôi có hai bàn chân."),
            Word::new("finger", "ngón tay", "👆", "I have ten fingers.", "Tôi có mười ngón tay."),
            Word::new("knee", "đầu gối", "🦵", "I bend my knees.", "Tôi gập đầu gối."),
        ]))
        .zone(Zone::new("body_action", "Body Actions", "Hành động cơ thể", "🏃").words([
            Word::new("run", "chạy", "🏃", "I can run fast.", "Tôi chạy nhanh."),
            Word::new("walk", "đi bộ", "🚶", "I walk to school.", "Tôi đi bộ đến trường."),
            Word::new("jump", "nhảy", "🤸", "I can jump high.", "Tôi nhảy cao."),
            Word::new("swim", "bơi", "🏊", "I swim in the pool.", "Tôi bơi trong hồ."),
            Word::new("dance", "nhảy múa", "💃", "I love to dance.", "Tôi thích nhảy múa."),
            Word::new("sleep", "ngủ", "😴", "I sleep at night.", "Tôi ngủ ban đêm."),
        ]))
}
